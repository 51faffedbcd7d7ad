use std::hint::black_box;

use bgl::records::Airport;
use bgl::test_support::{airport, approach, com, file, legs, name, runway, transition};
use bgl::{BglFile, FromRecord, Issues, Record};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn jfk() -> Vec<u8> {
    airport("KJFK", -73.7786, 40.6399)
        .child(name("KENNEDY INTL"))
        .child(runway(4, 1, 22, 2, 44.0, 3460.0))
        .child(runway(4, 2, 22, 1, 44.0, 2560.0))
        .child(runway(13, 1, 31, 2, 134.0, 3048.0))
        .child(runway(13, 2, 31, 1, 134.0, 4442.0))
        .child(com(6, 119_100_000, "KENNEDY TOWER"))
        .child(com(5, 121_900_000, "KENNEDY GROUND"))
        .child(
            approach(4, 4, "CI04L")
                .child(legs(0x2d, &[(15, "CI04L"), (4, "ROSLY"), (18, "RW04L")]))
                .child(legs(0x2e, &[(19, ""), (7, "DPK")]))
                .child(transition("DPK").child(legs(0x2f, &[(15, "DPK"), (18, "CI04L")]))),
        )
        .build()
}

/// Benchmark to decode a single airport tree
fn bench_records(c: &mut Criterion) {
    let bytes = jfk();

    c.bench_function("airport", |b| {
        b.iter(|| {
            let raw = bgl::Cursor::new(black_box(&bytes), 0)
                .next_record()
                .expect("airport should be present")
                .expect("airport should be read");
            Airport::from_record(&raw, &mut Issues::new()).expect("airport should decode")
        })
    });
}

/// Benchmark to decode a file of many airports
fn bench_file(c: &mut Criterion) {
    let data = file(std::iter::repeat_with(jfk).take(1000));
    let mut group = c.benchmark_group("file");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("baseline", |b| {
        b.iter(|| {
            let file = BglFile::parse(black_box(&data)).expect("header should be valid");
            black_box(file.records().count())
        })
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            let file = BglFile::parse(black_box(&data)).expect("header should be valid");
            let mut issues = Issues::new();
            let count = file
                .records()
                .filter_map(|(_, raw)| raw.ok())
                .filter_map(|raw| Record::decode(&raw, &mut issues).ok())
                .count();
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_file);
criterion_main!(benches);
