// benches/decode.rs
//! Decode-only benchmarks over pre-built wallets, KDF cost kept low so the
//! cipher and buffer handling dominate

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use openwallet::aliases::PasswordString;
use openwallet::{decode, decode_in_place, encode_with_salt, Salt16, WalletFormat};
use std::hint::black_box;

const KDF_ITERATIONS: u32 = 1_000;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let password = PasswordString::new("benchmark-password".to_string());
    let format = WalletFormat::default().with_kdf_iterations(KDF_ITERATIONS);
    let salt = Salt16::new([0x5a; 16]);

    for &size in &[KB, 64 * KB, MB] {
        let payload = vec![0x41u8; size];
        let wallet = encode_with_salt(&password, &salt, &payload, &format).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("owned", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let plaintext =
                    decode(black_box(wallet.clone()), black_box(&password), &format).unwrap();
                black_box(plaintext);
            });
        });
        group.bench_with_input(
            BenchmarkId::new("in_place", format_size(size)),
            &size,
            |b, _| {
                let mut buffer = wallet.clone();
                b.iter(|| {
                    buffer.copy_from_slice(&wallet);
                    let plaintext =
                        decode_in_place(black_box(&mut buffer), &password, &format).unwrap();
                    black_box(plaintext.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
