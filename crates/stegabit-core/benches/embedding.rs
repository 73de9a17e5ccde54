use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stegabit_core::embedder::embed_in_place;
use stegabit_core::framing::frame;
use stegabit_core::{CodecOptions, NumLsbs};

const COVER_LEN: usize = 1024 * 1024;

pub fn lsb_embedding(c: &mut Criterion) {
    let mut group = c.benchmark_group("LSB Embedding");
    let secret_message = vec![b'x'; 16 * 1024];
    group.throughput(Throughput::Bytes(secret_message.len() as u64));

    for n in [1u8, 2, 4, 8] {
        let options =
            CodecOptions::default().with_num_lsbs(NumLsbs::new(n).expect("valid lsbs"));
        let bits = frame(&secret_message, &options).expect("Cannot frame secret message");
        let mut cover = vec![0x5au8; COVER_LEN];

        group.bench_with_input(BenchmarkId::from_parameter(n), &bits, |b, bits| {
            b.iter(|| {
                embed_in_place(&mut cover, bits, options.num_lsbs)
                    .expect("Cannot embed secret message")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, lsb_embedding);
criterion_main!(benches);
