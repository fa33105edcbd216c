use console_inspect::{
    format, to_value, Array, Buffer, InspectOptions, Object, TypedArray, Value,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn sample_user() -> Value {
    to_value(&User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    })
    .unwrap()
}

fn benchmark_format_simple(c: &mut Criterion) {
    let value = sample_user();

    c.bench_function("format_simple_object", |b| {
        b.iter(|| format(black_box(std::slice::from_ref(&value)), InspectOptions::new()))
    });
}

fn benchmark_format_nested(c: &mut Criterion) {
    let root = Object::new();
    root.insert("user", sample_user());
    root.insert(
        "tags",
        Value::Array(Array::from_values(vec![
            Value::from("important"),
            Value::from("verified"),
            Value::from("production"),
        ])),
    );
    let meta = Object::new();
    meta.insert("created", "2023-01-01T00:00:00Z");
    meta.insert("version", 3);
    root.insert("meta", Value::Object(meta));
    let value = Value::Object(root);

    c.bench_function("format_nested_object", |b| {
        b.iter(|| format(black_box(std::slice::from_ref(&value)), InspectOptions::new()))
    });
}

fn benchmark_format_numeric_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_numeric_array");

    for size in [10, 50, 100, 500].iter() {
        let elements: Vec<Value> = (0..*size).map(Value::from).collect();
        let value = Value::Array(Array::from_values(elements));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| format(black_box(std::slice::from_ref(&value)), InspectOptions::new()))
        });
    }
    group.finish();
}

fn benchmark_format_typed_array(c: &mut Criterion) {
    let value = Value::TypedArray(TypedArray::from_u8((0..=255).collect()));

    c.bench_function("format_typed_array", |b| {
        b.iter(|| format(black_box(std::slice::from_ref(&value)), InspectOptions::new()))
    });
}

fn benchmark_format_buffer(c: &mut Criterion) {
    let value = Value::Buffer(Buffer::new((0..200).map(|i| (i % 256) as u8).collect()));

    c.bench_function("format_buffer", |b| {
        b.iter(|| format(black_box(std::slice::from_ref(&value)), InspectOptions::new()))
    });
}

fn benchmark_format_colored(c: &mut Criterion) {
    let value = sample_user();
    let options = InspectOptions::new().with_colors(true);

    c.bench_function("format_colored_object", |b| {
        b.iter(|| format(black_box(std::slice::from_ref(&value)), options))
    });
}

criterion_group!(
    benches,
    benchmark_format_simple,
    benchmark_format_nested,
    benchmark_format_numeric_array,
    benchmark_format_typed_array,
    benchmark_format_buffer,
    benchmark_format_colored,
);
criterion_main!(benches);
