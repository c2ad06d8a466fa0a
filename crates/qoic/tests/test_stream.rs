/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use qoic::constants::{
    QOI_HEADER_SIZE, QOI_MASK_2, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA,
    QOI_PADDING, QOI_PADDING_SIZE
};
use qoic::{decode, encode, QoiErrors, QoiHeader};

#[derive(Debug, PartialEq)]
enum Chunk {
    Index(u8),
    Other
}

/// Split the chunk section of an encoded stream
fn walk_chunks(stream: &[u8]) -> Vec<Chunk> {
    let end = stream.len() - QOI_PADDING_SIZE;
    let mut pos = QOI_HEADER_SIZE;
    let mut chunks = vec![];

    while pos < end {
        let tag = stream[pos];
        pos += 1;

        if tag == QOI_OP_RGB {
            pos += 3;
            chunks.push(Chunk::Other);
        } else if tag == QOI_OP_RGBA {
            pos += 4;
            chunks.push(Chunk::Other);
        } else if tag & QOI_MASK_2 == QOI_OP_INDEX {
            chunks.push(Chunk::Index(tag & 0x3f));
        } else {
            if tag & QOI_MASK_2 == QOI_OP_LUMA {
                pos += 1;
            }
            chunks.push(Chunk::Other);
        }
    }
    assert_eq!(pos, end, "chunk section does not end at the end marker");
    chunks
}

#[test]
fn test_no_repeated_index_chunks() {
    let mut rand = WyRand::new_seed(99);

    for channels in [3_usize, 4] {
        // few distinct colors, so the index table is hit all the time
        let colors: Vec<Vec<u8>> = (0..5)
            .map(|_| (0..channels).map(|_| rand.generate::<u8>()).collect())
            .collect();

        let mut pixels = vec![];
        for _ in 0..4096 {
            pixels.extend_from_slice(&colors[rand.generate_range(0_usize..5)]);
        }
        let stream = encode(&pixels, &QoiHeader::new(64, 64, channels as u8, 0)).unwrap();

        assert_eq!(&stream[stream.len() - QOI_PADDING_SIZE..], &QOI_PADDING);

        let chunks = walk_chunks(&stream);
        assert!(chunks.iter().any(|c| matches!(c, Chunk::Index(_))));

        for pair in chunks.windows(2) {
            if let (Chunk::Index(a), Chunk::Index(b)) = (&pair[0], &pair[1]) {
                assert_ne!(a, b, "two adjacent INDEX chunks for slot {a}");
            }
        }
    }
}

#[test]
fn test_header_layout() {
    let stream = encode(&[0; 16], &QoiHeader::new(2, 2, 4, 1)).unwrap();
    assert_eq!(
        &stream[..14],
        &[0x71, 0x6F, 0x69, 0x66, 0, 0, 0, 2, 0, 0, 0, 2, 4, 1]
    );
}

#[test]
fn test_malformed_headers() {
    let good = encode(&[1, 2, 3], &QoiHeader::new(1, 1, 3, 0)).unwrap();

    let mut bad_magic = good.clone();
    bad_magic[..4].copy_from_slice(b"qoiF");
    assert!(matches!(
        decode(&bad_magic, 0),
        Err(QoiErrors::WrongMagicBytes)
    ));

    let mut bad_channels = good.clone();
    bad_channels[12] = 2;
    assert!(matches!(
        decode(&bad_channels, 0),
        Err(QoiErrors::UnknownChannels(2))
    ));

    let mut bad_colorspace = good.clone();
    bad_colorspace[13] = 2;
    assert!(matches!(
        decode(&bad_colorspace, 0),
        Err(QoiErrors::UnknownColorspace(2))
    ));

    let mut zero_width = good.clone();
    zero_width[4..8].copy_from_slice(&0_u32.to_be_bytes());
    assert!(matches!(
        decode(&zero_width, 0),
        Err(QoiErrors::ZeroDimensions)
    ));

    // 20_000 * 20_000 is exactly the pixel cap
    let mut too_many = good.clone();
    too_many[4..8].copy_from_slice(&20_000_u32.to_be_bytes());
    too_many[8..12].copy_from_slice(&20_000_u32.to_be_bytes());
    assert!(matches!(
        decode(&too_many, 0),
        Err(QoiErrors::TooManyPixels(20_000, 20_000))
    ));

    assert!(matches!(
        decode(&good[..21], 0),
        Err(QoiErrors::InsufficientData(22, 21))
    ));
}

#[test]
fn test_garbage_chunks_do_not_panic() {
    let mut rand = WyRand::new_seed(1234);

    for _ in 0..64 {
        let width = rand.generate_range(1_u32..40);
        let height = rand.generate_range(1_u32..40);
        let channels = if rand.generate_range(0_u8..2) == 0 { 3 } else { 4 };

        let mut stream = QoiHeader::new(width, height, channels, 0).to_bytes().to_vec();
        let mut body = vec![0_u8; rand.generate_range(0_usize..200)];
        rand.fill(&mut body);
        stream.extend_from_slice(&body);
        stream.extend_from_slice(&QOI_PADDING);

        let (pixels, header) = decode(&stream, 0).unwrap();
        assert_eq!(pixels.len(), header.pixel_count() * usize::from(channels));
    }
}
