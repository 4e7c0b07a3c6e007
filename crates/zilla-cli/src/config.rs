use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use zilla_compiler::{CompilerOptions, NumericLiteralStyle};
use zilla_runtime::BuiltinManifest;

use crate::args::CliArgs;

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "zilla.json";

/// Custom deserializer for boolean options that accepts both bool and string values.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZillaConfig {
    #[serde(default)]
    pub compiler_options: Option<ConfigCompilerOptions>,
    /// Built-ins added on top of the runtime defaults.
    #[serde(default)]
    pub builtins: Option<BuiltinManifest>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default)]
    pub out_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigCompilerOptions {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub line_comments: Option<bool>,
    #[serde(default)]
    pub numeric_literals: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub line_numbers: Option<bool>,
}

/// Everything the driver needs, after merging the project file with the command line.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub compiler: CompilerOptions,
    pub line_numbers: bool,
    pub out_dir: Option<PathBuf>,
    pub files: Vec<PathBuf>,
}

pub fn parse_config(source: &str) -> Result<ZillaConfig> {
    let config = serde_json::from_str(source)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ZillaConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Locate the project file: an explicit `--project` path (file or directory),
/// otherwise `zilla.json` in `cwd` when present.
pub fn find_config(cwd: &Path, project: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(project) = project else {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        return Ok(candidate.is_file().then_some(candidate));
    };

    let project = if project.is_absolute() {
        project.to_path_buf()
    } else {
        cwd.join(project)
    };
    let path = if project.is_dir() {
        project.join(CONFIG_FILE_NAME)
    } else {
        project
    };
    if !path.is_file() {
        bail!("project file not found: {}", path.display());
    }
    Ok(Some(path))
}

/// Apply the `compilerOptions` block over the defaults. Returns the compiler
/// options and whether line numbering was requested.
pub fn resolve_compiler_options(
    options: Option<&ConfigCompilerOptions>,
) -> Result<(CompilerOptions, bool)> {
    let mut resolved = CompilerOptions::default();
    let Some(options) = options else {
        return Ok((resolved, false));
    };

    if let Some(line_comments) = options.line_comments {
        resolved.line_comments = line_comments;
    }
    if let Some(style) = options.numeric_literals.as_deref() {
        resolved.numeric_literals = style
            .parse::<NumericLiteralStyle>()
            .map_err(anyhow::Error::msg)?;
    }

    Ok((resolved, options.line_numbers.unwrap_or(false)))
}

/// Merge the project file (if any) and the command line into one configuration.
///
/// Command-line values win. Paths in the project file are relative to its
/// directory; paths on the command line are relative to `cwd`.
pub fn resolve_config(args: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
    let config_path = find_config(cwd, args.project.as_deref())?;
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => ZillaConfig::default(),
    };
    let base_dir = config_path
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(cwd)
        .to_path_buf();

    let (mut compiler, mut line_numbers) =
        resolve_compiler_options(config.compiler_options.as_ref())?;

    if args.no_line_comments {
        compiler.line_comments = false;
    }
    if let Some(style) = args.numeric_literals {
        compiler.numeric_literals = style;
    }
    if args.line_numbers {
        line_numbers = true;
    }

    let mut extra = config.builtins.clone().unwrap_or_default();
    if let Some(path) = &args.builtins {
        let path = cwd.join(path);
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read builtins: {}", path.display()))?;
        let manifest = BuiltinManifest::from_json_str(&source)
            .with_context(|| format!("failed to parse builtins: {}", path.display()))?;
        extra.extend(&manifest);
    }
    if !extra.is_empty() {
        let mut manifest = BuiltinManifest::default_manifest().clone();
        manifest.extend(&extra);
        compiler.builtins = Some(manifest);
    }

    let out_dir = match (&args.out_dir, &config.out_dir) {
        (Some(dir), _) => Some(cwd.join(dir)),
        (None, Some(dir)) => Some(base_dir.join(dir)),
        (None, None) => None,
    };

    let files = if args.files.is_empty() {
        config
            .files
            .unwrap_or_default()
            .iter()
            .map(|file| base_dir.join(file))
            .collect()
    } else {
        args.files.iter().map(|file| cwd.join(file)).collect()
    };

    Ok(ResolvedConfig {
        compiler,
        line_numbers,
        out_dir,
        files,
    })
}
