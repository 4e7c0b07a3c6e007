//! Driver behavior over real files.

use std::path::{Path, PathBuf};

use zilla_cli::args::CliArgs;
use zilla_cli::driver::{self, output_path};
use zilla_common::diagnostics::diagnostic_codes;

const HELLO: &str = r#"{
  "type": "Program",
  "body": [
    { "type": "ExpressionStatement",
      "loc": { "start": { "line": 1, "column": 0 }, "end": { "line": 1, "column": 21 } },
      "expression": {
        "type": "CallExpression",
        "callee": { "type": "MemberExpression", "computed": false,
          "object": { "type": "Identifier", "name": "console" },
          "property": { "type": "Identifier", "name": "log" } },
        "arguments": [ { "type": "StringLiteral", "value": "hi" } ] } }
  ]
}"#;

const COMPUTED: &str = r#"{
  "type": "Program",
  "body": [
    { "type": "ExpressionStatement",
      "loc": { "start": { "line": 4, "column": 2 }, "end": { "line": 4, "column": 8 } },
      "expression": {
        "type": "MemberExpression", "computed": true,
        "loc": { "start": { "line": 4, "column": 2 }, "end": { "line": 4, "column": 8 } },
        "object": { "type": "Identifier", "name": "obj" },
        "property": { "type": "Identifier", "name": "k" } } }
  ]
}"#;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}

fn args_for(files: &[&str]) -> CliArgs {
    CliArgs {
        files: files.iter().map(PathBuf::from).collect(),
        ..CliArgs::default()
    }
}

#[test]
fn compiles_to_generated_code_without_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "hello.json", HELLO);

    let result = driver::compile(&args_for(&["hello.json"]), dir.path()).unwrap();
    assert!(!result.has_errors());
    assert!(result.emitted_files.is_empty());
    assert_eq!(result.files_read, vec![dir.path().join("hello.json")]);
    assert_eq!(
        result.generated[0].text,
        "// line 1: console.log(\"hi\");\nConsoleLog([]Object{JSString(\"hi\")})\n\n"
    );
}

#[test]
fn writes_one_go_file_per_input_into_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "hello.json", HELLO);

    let args = CliArgs {
        out_dir: Some(PathBuf::from("out")),
        no_line_comments: true,
        ..args_for(&["hello.json"])
    };
    let result = driver::compile(&args, dir.path()).unwrap();

    let expected = dir.path().join("out").join("hello.go");
    assert_eq!(result.emitted_files, vec![expected.clone()]);
    assert!(result.generated.is_empty());
    assert_eq!(
        std::fs::read_to_string(expected).unwrap(),
        "ConsoleLog([]Object{JSString(\"hi\")})\n\n"
    );
}

#[test]
fn failing_file_reports_diagnostic_and_others_still_compile() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "bad.json", COMPUTED);
    write_file(dir.path(), "good.json", HELLO);

    let result = driver::compile(&args_for(&["bad.json", "good.json"]), dir.path()).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    let diag = &result.diagnostics[0];
    assert_eq!(diag.code, diagnostic_codes::COMPUTED_MEMBER_ACCESS);
    assert_eq!(diag.start.line, 4);
    assert!(diag.file.ends_with("bad.json"));

    assert_eq!(result.generated.len(), 1);
    assert_eq!(result.generated[0].source, dir.path().join("good.json"));
}

#[test]
fn malformed_json_is_an_invalid_tree_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "broken.json", "{\n  \"type\": \"Program\",\n  \"body\": [\n");

    let result = driver::compile(&args_for(&["broken.json"]), dir.path()).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, diagnostic_codes::INVALID_PROGRAM_TREE);
    assert!(result.diagnostics[0].start.line > 0);
    assert!(result.generated.is_empty());
}

#[test]
fn line_numbers_wrap_generated_code() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "hello.json", HELLO);

    let args = CliArgs {
        line_numbers: true,
        no_line_comments: true,
        ..args_for(&["hello.json"])
    };
    let result = driver::compile(&args, dir.path()).unwrap();
    let text = &result.generated[0].text;
    assert!(
        text.starts_with("1 | ConsoleLog([]Object{JSString(\"hi\")})"),
        "{text}"
    );
}

#[test]
fn project_file_supplies_inputs_and_builtins() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "hello.json", HELLO);
    write_file(
        dir.path(),
        "zilla.json",
        r#"{
          "compilerOptions": { "lineComments": false },
          "builtins": { "console": { "log": "Println" } },
          "files": ["hello.json"]
        }"#,
    );

    let result = driver::compile(&CliArgs::default(), dir.path()).unwrap();
    assert_eq!(
        result.generated[0].text,
        "Println([]Object{JSString(\"hi\")})\n\n"
    );
}

#[test]
fn no_inputs_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = driver::compile(&CliArgs::default(), dir.path()).unwrap_err();
    assert!(err.to_string().contains("no input files"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = driver::compile(&args_for(&["absent.json"]), dir.path()).unwrap_err();
    assert!(err.to_string().contains("failed to read input"));
}

#[test]
fn output_path_replaces_extension() {
    assert_eq!(
        output_path(Path::new("build"), Path::new("src/app.json")),
        PathBuf::from("build/app.go")
    );
}

#[test]
fn multiple_inputs_on_stdout_get_file_headers() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.json", HELLO);
    write_file(dir.path(), "b.json", HELLO);

    let args = CliArgs {
        no_line_comments: true,
        ..args_for(&["a.json", "b.json"])
    };
    let result = driver::compile(&args, dir.path()).unwrap();
    let body = "ConsoleLog([]Object{JSString(\"hi\")})\n\n";
    assert_eq!(
        result.stdout_text(),
        format!(
            "// file: {}\n{body}// file: {}\n{body}",
            dir.path().join("a.json").display(),
            dir.path().join("b.json").display()
        )
    );
}

#[test]
fn single_input_on_stdout_has_no_header() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.json", HELLO);

    let args = CliArgs {
        no_line_comments: true,
        ..args_for(&["a.json"])
    };
    let result = driver::compile(&args, dir.path()).unwrap();
    assert_eq!(
        result.stdout_text(),
        "ConsoleLog([]Object{JSString(\"hi\")})\n\n"
    );
}
