use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use utx_tests::{sample_header, sample_version};
use utx_types::BlockHeader;
use utx_wire::{DataStream, Scope, Transcodable, decode_from_slice, encode_to_vec};

fn bench_header_encode(c: &mut Criterion) {
    c.bench_function("header_encode", |b| {
        let mut header = sample_header();
        b.iter(|| encode_to_vec(&mut header, Scope::NETWORK).unwrap());
    });
}

fn bench_header_decode(c: &mut Criterion) {
    let bytes = encode_to_vec(&mut sample_header(), Scope::NETWORK).unwrap();

    c.bench_function("header_decode", |b| {
        b.iter(|| decode_from_slice::<BlockHeader>(&bytes, Scope::NETWORK).unwrap());
    });
}

fn bench_header_measure(c: &mut Criterion) {
    c.bench_function("header_measure", |b| {
        let mut header = sample_header();
        let mut stream = DataStream::new(Scope::NETWORK);
        b.iter(|| header.serialized_size(&mut stream).unwrap());
    });
}

fn bench_version_roundtrip(c: &mut Criterion) {
    c.bench_function("version_roundtrip", |b| {
        let mut msg = sample_version();
        b.iter(|| {
            let bytes = encode_to_vec(&mut msg, Scope::NETWORK).unwrap();
            decode_from_slice::<utx_types::VersionMessage>(&bytes, Scope::NETWORK).unwrap()
        });
    });
}

fn bench_block_id(c: &mut Criterion) {
    let header = sample_header();

    c.bench_function("block_id", |b| {
        b.iter(|| header.id().unwrap());
    });
}

fn bench_solution_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("solution_throughput");

    for size_kb in [1, 16, 128] {
        let mut header = sample_header();
        header.solution = vec![0x55; size_kb * 1024];
        let bytes = encode_to_vec(&mut header, Scope::NETWORK).unwrap();
        #[allow(clippy::cast_possible_truncation)]
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode", format!("{size_kb}kb")),
            &bytes,
            |b, bytes| {
                b.iter(|| decode_from_slice::<BlockHeader>(bytes, Scope::NETWORK).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_header_encode,
    bench_header_decode,
    bench_header_measure,
    bench_version_roundtrip,
    bench_block_id,
    bench_solution_throughput
);
criterion_main!(benches);
