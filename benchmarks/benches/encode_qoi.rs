/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use qoic::qoic_core::bit_depth::BitDepth;
use qoic::qoic_core::colorspace::ColorSpace;
use qoic::qoic_core::options::EncoderOptions;
use qoic::QoiEncoder;
use qoic_benches::sample_image;

fn bench_encode(c: &mut Criterion) {
    let (width, height) = (1920, 1080);

    for colorspace in [ColorSpace::RGB, ColorSpace::RGBA] {
        let pixels = sample_image(width, height, colorspace.num_components());
        let options = EncoderOptions::new(width, height, colorspace, BitDepth::Eight);

        let mut group = c.benchmark_group(format!("qoi: Simple encode, {colorspace:?}"));

        group.throughput(Throughput::Bytes(pixels.len() as u64));

        // reuse the output allocation between iterations
        let mut sink: Vec<u8> = Vec::with_capacity(QoiEncoder::new(&pixels, options).max_size());

        group.bench_function("qoic", |b| {
            b.iter(|| {
                sink.clear();
                let mut encoder = QoiEncoder::new(&pixels, options);
                black_box(encoder.encode(&mut sink).unwrap())
            })
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_encode);

criterion_main!(benches);
