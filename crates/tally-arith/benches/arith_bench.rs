// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tally_arith::{add, invoke::Registry, value::Value};

fn bench_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed");

    group.bench_function("add", |b| {
        b.iter(|| add::add(black_box(i32::MAX), black_box(1)))
    });
    group.bench_function("subtract", |b| {
        b.iter(|| add::subtract(black_box(0), black_box(i32::MIN)))
    });
    group.bench_function("float_add_half", |b| {
        b.iter(|| add::float_add_half(black_box(1.5)))
    });
    group.bench_function("add_many", |b| {
        b.iter(|| {
            add::add_many(
                black_box(1),
                black_box(2),
                black_box(3),
                black_box(4),
                black_box(5),
                black_box(6),
            )
        })
    });

    group.finish();
}

fn bench_invoke(c: &mut Criterion) {
    let registry = Registry::standard();
    let mut group = c.benchmark_group("invoke");

    let cases: [(&str, Vec<Value>); 3] = [
        ("add", vec![Value::Int(2), Value::Int(3)]),
        ("doubleAddHalf", vec![Value::Double(1.5)]),
        ("addMany", vec![Value::Int(1); 6]),
    ];

    for (name, args) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), args, |b, args| {
            b.iter(|| registry.invoke(black_box(name), black_box(args)))
        });
    }

    group.bench_function("invoke_str/subtract", |b| {
        b.iter(|| registry.invoke_str(black_box("subtract"), black_box(&["2", "3"])))
    });

    group.finish();
}

criterion_group!(benches, bench_typed, bench_invoke);
criterion_main!(benches);
