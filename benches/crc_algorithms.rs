use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crc_registry::{calculate, initialize, CrcRegistry};

fn benchmark_bit_serial_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("BitSerialWidths");

    for name in &[
        "CRC-5/USB",
        "CRC-8/SMBUS",
        "CRC-12/UMTS",
        "CRC-16/MODBUS",
        "CRC-21/CAN-FD",
        "CRC-32/ISO-HDLC",
    ] {
        for size in &[16, 64, 256, 1024] {
            let data = vec![0xa5u8; *size];
            let mut engine = initialize(name).unwrap();

            group.bench_with_input(
                BenchmarkId::new(*name, size),
                size,
                |b, &_size| {
                    b.iter(|| {
                        engine.update(black_box(&data));
                        engine.finalize()
                    })
                },
            );
        }
    }

    group.finish();
}

fn benchmark_one_shot_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("Facade");
    let data = vec![0x5au8; 64];

    group.bench_function("calculate_crc32", |b| {
        b.iter(|| calculate(black_box("CRC-32/ISO-HDLC"), black_box(&data)).unwrap())
    });

    group.bench_function("calculate_crc16", |b| {
        b.iter(|| calculate(black_box("CRC-16/ARC"), black_box(&data)).unwrap())
    });

    group.finish();
}

fn benchmark_registry_lookup(c: &mut Criterion) {
    let registry = CrcRegistry::with_standard_catalog();
    let mut group = c.benchmark_group("Registry");

    group.bench_function("get", |b| {
        b.iter(|| registry.get(black_box("CRC-16/MODBUS")).unwrap())
    });

    group.bench_function("names", |b| b.iter(|| registry.names()));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_bit_serial_widths,
    benchmark_one_shot_facade,
    benchmark_registry_lookup
);
criterion_main!(benches);
