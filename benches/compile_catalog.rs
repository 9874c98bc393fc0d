//! Benchmark: compile a synthetic catalog of record types, sequentially and
//! with `compile_all`, plus raw definition parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldlayout::{compile, compile_all, parse_definition, RecordDefinitions};

fn record(i: usize) -> RecordDefinitions {
    let mut defs = vec![
        format!("s32 id{}", i),
        "f32 weight".to_string(),
        "fixstrW name[32]".to_string(),
    ];
    for run in 0..4 {
        defs.extend((0..8).map(|bit| format!("u8 flag{}_{}:1", run, bit)));
    }
    defs.extend((0..16).map(|bit| format!("u16 wideFlag{}:1", bit)));
    defs.push("u32 Weight".to_string());
    defs.push("dummy8 pad[3]".to_string());
    RecordDefinitions::new(format!("Record{}", i), defs)
}

fn bench_compile(c: &mut Criterion) {
    let records: Vec<RecordDefinitions> = (0..200).map(record).collect();

    c.bench_function("parse_definition", |b| {
        b.iter(|| {
            for def in &records[0].definitions {
                let _ = black_box(parse_definition(black_box(def)));
            }
        })
    });

    c.bench_function("compile_sequential", |b| {
        b.iter(|| {
            for r in &records {
                let _ = black_box(compile(&r.name, &r.definitions));
            }
        })
    });

    c.bench_function("compile_all", |b| {
        b.iter(|| black_box(compile_all(black_box(&records))))
    });
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
