use super::args::CliArgs;
use super::config::{
    CONFIG_FILE_NAME, find_config, parse_config, resolve_compiler_options, resolve_config,
};
use std::path::{Path, PathBuf};
use zilla_compiler::NumericLiteralStyle;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}

#[test]
fn parses_boolean_options_given_as_strings() {
    let config = parse_config(
        r#"{ "compilerOptions": { "lineComments": "false", "lineNumbers": "yes" } }"#,
    )
    .unwrap();
    let (options, line_numbers) =
        resolve_compiler_options(config.compiler_options.as_ref()).unwrap();
    assert!(!options.line_comments);
    assert!(line_numbers);
}

#[test]
fn rejects_invalid_boolean_string() {
    let err = parse_config(r#"{ "compilerOptions": { "lineComments": "maybe" } }"#).unwrap_err();
    assert!(err.to_string().contains("invalid boolean value"), "{err}");
}

#[test]
fn rejects_invalid_numeric_style() {
    let config =
        parse_config(r#"{ "compilerOptions": { "numericLiterals": "octal" } }"#).unwrap();
    let err = resolve_compiler_options(config.compiler_options.as_ref()).unwrap_err();
    assert!(err.to_string().contains("invalid numeric literal style"), "{err}");
}

#[test]
fn missing_compiler_options_yield_defaults() {
    let (options, line_numbers) = resolve_compiler_options(None).unwrap();
    assert!(options.line_comments);
    assert_eq!(options.numeric_literals, NumericLiteralStyle::Fixed);
    assert!(options.builtins.is_none());
    assert!(!line_numbers);
}

#[test]
fn finds_config_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(find_config(dir.path(), None).unwrap().is_none());

    let path = write_file(dir.path(), CONFIG_FILE_NAME, "{}");
    assert_eq!(find_config(dir.path(), None).unwrap(), Some(path));
}

#[test]
fn project_flag_accepts_directory_and_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("app");
    std::fs::create_dir(&nested).unwrap();

    assert!(find_config(dir.path(), Some(Path::new("app"))).is_err());

    let path = write_file(&nested, CONFIG_FILE_NAME, "{}");
    assert_eq!(find_config(dir.path(), Some(Path::new("app"))).unwrap(), Some(path));
}

#[test]
fn command_line_overrides_project_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        CONFIG_FILE_NAME,
        r#"{
          "compilerOptions": { "lineComments": true, "numericLiterals": "fixed" },
          "files": ["from_config.json"],
          "outDir": "gen"
        }"#,
    );

    let args = CliArgs {
        no_line_comments: true,
        numeric_literals: Some(NumericLiteralStyle::Lexical),
        files: vec![PathBuf::from("cli.json")],
        ..CliArgs::default()
    };
    let resolved = resolve_config(&args, dir.path()).unwrap();

    assert!(!resolved.compiler.line_comments);
    assert_eq!(resolved.compiler.numeric_literals, NumericLiteralStyle::Lexical);
    assert_eq!(resolved.files, vec![dir.path().join("cli.json")]);
    assert_eq!(resolved.out_dir, Some(dir.path().join("gen")));
}

#[test]
fn project_builtins_extend_the_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        CONFIG_FILE_NAME,
        r#"{ "builtins": { "fmt": { "println": "FmtPrintln" } }, "files": ["p.json"] }"#,
    );

    let resolved = resolve_config(&CliArgs::default(), dir.path()).unwrap();
    let manifest = resolved.compiler.builtins.expect("merged manifest");
    assert_eq!(manifest.lookup("fmt", "println"), Some("FmtPrintln"));
    assert_eq!(manifest.lookup("console", "log"), Some("ConsoleLog"));
    assert_eq!(resolved.files, vec![dir.path().join("p.json")]);
}

#[test]
fn builtins_file_overrides_project_entries() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        CONFIG_FILE_NAME,
        r#"{ "builtins": { "console": { "log": "ProjectLog" } } }"#,
    );
    write_file(
        dir.path(),
        "extra.json",
        r#"{ "console": { "log": "ExtraLog" } }"#,
    );

    let args = CliArgs {
        builtins: Some(PathBuf::from("extra.json")),
        ..CliArgs::default()
    };
    let resolved = resolve_config(&args, dir.path()).unwrap();
    let manifest = resolved.compiler.builtins.unwrap();
    assert_eq!(manifest.lookup("console", "log"), Some("ExtraLog"));
    assert_eq!(manifest.lookup("Math", "floor"), Some("MathFloor"));
}
