//! Compiler benchmarks.
//!
//! Measures tree loading and translation separately, over generated programs
//! of increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use zilla::ast::builder::{assign, binary, call, expr_stmt, ident, member, num, program, str_lit, var_decl};
use zilla::ast::{File, Program};
use zilla::compiler::{CompilerOptions, compile};

/// A program of `blocks` repetitions of a declaration, an update and a call.
fn generate_program(blocks: usize) -> Program {
    let mut body = Vec::with_capacity(blocks * 3);
    for i in 0..blocks {
        let name = format!("v{i}");
        let line = u32::try_from(i * 3 + 1).unwrap_or(u32::MAX);
        body.push(var_decl(line, vec![(name.as_str(), Some(num(i as f64)))]));
        body.push(expr_stmt(
            line + 1,
            assign(ident(&name), "=", binary(ident(&name), "*", num(2.5))),
        ));
        body.push(expr_stmt(
            line + 2,
            call(
                member(ident("console"), "log"),
                vec![str_lit("value"), ident(&name), ident("undeclared")],
            ),
        ));
    }
    program(body)
}

/// Babel-shaped JSON for `blocks` declaration and call statement pairs.
fn generate_json(blocks: usize) -> String {
    let mut statements = Vec::with_capacity(blocks * 2);
    for i in 0..blocks {
        let line = i * 2 + 1;
        statements.push(format!(
            r#"{{"type":"VariableDeclaration","kind":"var","loc":{{"start":{{"line":{line},"column":0}},"end":{{"line":{line},"column":12}}}},"declarations":[{{"type":"VariableDeclarator","id":{{"type":"Identifier","name":"v{i}"}},"init":{{"type":"NumericLiteral","value":{i}}}}}]}}"#
        ));
        statements.push(format!(
            r#"{{"type":"ExpressionStatement","loc":{{"start":{{"line":{next},"column":0}},"end":{{"line":{next},"column":16}}}},"expression":{{"type":"CallExpression","callee":{{"type":"MemberExpression","computed":false,"object":{{"type":"Identifier","name":"console"}},"property":{{"type":"Identifier","name":"log"}}}},"arguments":[{{"type":"Identifier","name":"v{i}"}}]}}}}"#,
            next = line + 1
        ));
    }
    format!(
        r#"{{"type":"File","program":{{"type":"Program","body":[{}]}}}}"#,
        statements.join(",")
    )
}

// =============================================================================
// Compiler Benchmarks
// =============================================================================

/// Benchmark: translate prebuilt trees
fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    let options = CompilerOptions::default();

    for blocks in [10, 100, 1_000] {
        let prog = generate_program(blocks);
        group.throughput(Throughput::Elements((blocks * 3) as u64));
        group.bench_with_input(BenchmarkId::new("statements", blocks * 3), &prog, |b, prog| {
            b.iter(|| black_box(compile(prog, &options)))
        });
    }

    group.finish();
}

/// Benchmark: load JSON then translate
fn bench_load_and_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_and_compile");
    let options = CompilerOptions::default();

    for blocks in [10, 100, 1_000] {
        let source = generate_json(blocks);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("json", blocks * 2), &source, |b, source| {
            b.iter(|| {
                let file = File::from_json_str(source).map(|file| compile(&file.program, &options));
                black_box(file)
            })
        });
    }

    group.finish();
}

/// Benchmark: line comments off, isolating the translator output path
fn bench_compile_without_line_comments(c: &mut Criterion) {
    let options = CompilerOptions {
        line_comments: false,
        ..CompilerOptions::default()
    };
    let prog = generate_program(500);
    c.bench_function("compile_no_line_comments", |b| {
        b.iter(|| black_box(compile(&prog, &options)))
    });
}

criterion_group!(
    benches,
    bench_compile,
    bench_load_and_compile,
    bench_compile_without_line_comments
);
criterion_main!(benches);
