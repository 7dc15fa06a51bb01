//! Performance benchmarks for codesniff

use codesniff::{Language, detect_and_extract, extract_symbols};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

// Sample snippets for benchmarking classification and extraction

const PYTHON_SOURCE: &str = r#"import os

def load(path):
    with open(path) as f:
        return f.read()

def save(path, data):
    with open(path, "w") as f:
        f.write(data)

class Store:
    def flush(self):
        pass
"#;

const JAVA_SOURCE: &str = r#"public class Main {
    public static void main(String[] args) {
        System.out.println(greet("world"));
    }

    private static String greet(String name) {
        return "Hello, " + name;
    }
}
"#;

const CPP_SOURCE: &str = r#"#include <iostream>

void Widget::draw(int x) {
    std::cout << x;
}

int main() {
    Widget w;
    w.draw(42);
    return 0;
}
"#;

const JS_SOURCE: &str = r#"import fs from 'fs';

function readConfig(path) {
    return JSON.parse(fs.readFileSync(path));
}

const writeConfig = function (path, config) {
    fs.writeFileSync(path, JSON.stringify(config));
};
"#;

const PLAINTEXT_SOURCE: &str = "The quick brown fox jumps over the lazy dog.\n";

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("python", |b| {
        b.iter(|| Language::classify(black_box(PYTHON_SOURCE)))
    });
    group.bench_function("java", |b| {
        b.iter(|| Language::classify(black_box(JAVA_SOURCE)))
    });
    group.bench_function("cpp", |b| {
        b.iter(|| Language::classify(black_box(CPP_SOURCE)))
    });
    group.bench_function("javascript", |b| {
        b.iter(|| Language::classify(black_box(JS_SOURCE)))
    });
    group.bench_function("plaintext", |b| {
        b.iter(|| Language::classify(black_box(PLAINTEXT_SOURCE)))
    });

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    group.bench_function("python_structured", |b| {
        b.iter(|| extract_symbols(black_box(PYTHON_SOURCE), Language::Python))
    });

    // A fragment forces the structured parse to fall back to patterns
    let fragment = "def broken(x):\n    return (\n";
    group.bench_function("python_fallback", |b| {
        b.iter(|| extract_symbols(black_box(fragment), Language::Python))
    });

    group.bench_function("java", |b| {
        b.iter(|| extract_symbols(black_box(JAVA_SOURCE), Language::Java))
    });
    group.bench_function("cpp", |b| {
        b.iter(|| extract_symbols(black_box(CPP_SOURCE), Language::Cpp))
    });
    group.bench_function("javascript", |b| {
        b.iter(|| extract_symbols(black_box(JS_SOURCE), Language::JavaScript))
    });

    group.finish();
}

fn bench_detect_and_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_and_extract");

    group.bench_function("python", |b| {
        b.iter(|| detect_and_extract(black_box(PYTHON_SOURCE)))
    });
    group.bench_function("javascript", |b| {
        b.iter(|| detect_and_extract(black_box(JS_SOURCE)))
    });

    // Scaling check: extraction cost should stay linear in snippet length
    let large: String = JS_SOURCE.repeat(200);
    group.bench_function("javascript_200x", |b| {
        b.iter(|| detect_and_extract(black_box(&large)))
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_extract, bench_detect_and_extract);
criterion_main!(benches);
