//! CRC-32 / CRC-64 benchmarks.
//!
//! Run: `cargo bench -p crckit`
//!
//! This benchmarks:
//! - One-shot computation with the shared canonical table
//! - One-shot computation that builds a private table per call
//! - Streaming updates in small chunks
//! - The table-less bitwise reference

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use crckit::{CRC32_ZIP_POLY, CRC64_ISO_POLY, Crc32, Crc64Iso, TableCache, TableRegistry, bitwise, crc32, crc64};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [64, 256, 1024, 4096, 16384, 65536];

/// Smaller sizes for the bitwise reference.
const BITWISE_SIZES: [usize; 4] = [16, 64, 256, 1024];

fn bench_shared(c: &mut Criterion) {
  let mut group = c.benchmark_group("shared");

  for size in SIZES {
    let data = vec![0xA5u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("crc32", size), &data, |b, data| {
      b.iter(|| black_box(crc32::compute(data)));
    });
    group.bench_with_input(BenchmarkId::new("crc64-iso", size), &data, |b, data| {
      b.iter(|| black_box(crc64::compute(data)));
    });
  }

  group.finish();
}

/// Per-call table construction, as a non-canonical polynomial would pay.
fn bench_private(c: &mut Criterion) {
  let mut group = c.benchmark_group("private");
  let registry = TableRegistry::with_mode(TableCache::Private);

  for size in SIZES {
    let data = vec![0xA5u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("crc32", size), &data, |b, data| {
      b.iter(|| black_box(crc32::compute_in(&registry, CRC32_ZIP_POLY, !0, data)));
    });
    group.bench_with_input(BenchmarkId::new("crc64-iso", size), &data, |b, data| {
      b.iter(|| black_box(crc64::compute_in(&registry, CRC64_ISO_POLY, 0, data)));
    });
  }

  group.finish();
}

fn bench_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("streaming-31b");
  let size = 65536;
  let data = vec![0x5Au8; size];
  group.throughput(Throughput::Bytes(size as u64));

  group.bench_function("crc32", |b| {
    b.iter(|| {
      let mut h = Crc32::new();
      for part in data.chunks(31) {
        h.update(part);
      }
      black_box(h.finalize())
    });
  });
  group.bench_function("crc64-iso", |b| {
    b.iter(|| {
      let mut h = Crc64Iso::new();
      for part in data.chunks(31) {
        h.update(part);
      }
      black_box(h.finalize())
    });
  });

  group.finish();
}

fn bench_bitwise(c: &mut Criterion) {
  let mut group = c.benchmark_group("bitwise");

  for size in BITWISE_SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("crc32", size), &data, |b, data| {
      b.iter(|| black_box(bitwise::crc32::compute(CRC32_ZIP_POLY, !0, data) ^ !0));
    });
    group.bench_with_input(BenchmarkId::new("crc64-iso", size), &data, |b, data| {
      b.iter(|| black_box(bitwise::crc64::compute(CRC64_ISO_POLY, 0, data)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_shared, bench_private, bench_streaming, bench_bitwise);
criterion_main!(benches);
