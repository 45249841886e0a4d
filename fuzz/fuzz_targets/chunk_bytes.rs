#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use rollsplit::{chunk_bytes, ChunkConfig, Chunker};

fuzz_target!(|data: Vec<u8>| {
    // Test with various chunk configurations
    let configs = vec![
        // Small chunks
        ChunkConfig::new(4, 16, 64).unwrap(),
        // Medium chunks
        ChunkConfig::new(64, 256, 1024).unwrap(),
        // Large chunks
        ChunkConfig::new(256, 4096, 16384).unwrap(),
        // Sizes that are not powers of two
        ChunkConfig::new(100, 500, 2000).unwrap(),
        // Default config
        ChunkConfig::default(),
    ];

    for config in configs {
        let chunks = chunk_bytes(data.clone(), config);

        // Verify: concatenated chunks reproduce the input exactly
        let rebuilt: Vec<u8> = chunks
            .iter()
            .flat_map(|c| c.data.iter().copied())
            .collect();
        assert_eq!(rebuilt, data);

        // Verify: offsets are contiguous from zero
        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.offset, Some(expected_offset));
            expected_offset += chunk.len() as u64;
        }

        // Verify: the first chunk of a long enough stream is the fixed cut
        if data.len() >= config.first_size() {
            assert_eq!(chunks[0].len(), config.first_size());
            assert_eq!(chunks[0].bits, Some(config.first_size().ilog2()));
        } else {
            assert!(chunks.len() <= 1);
            if let Some(only) = chunks.first() {
                assert_eq!(only.len(), data.len());
                assert_eq!(only.bits, None);
            }
        }

        // Verify: size bounds hold
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(chunk.len() <= config.max_size());
            // Chunks between the first and the tail must exceed min_size
            // and carry a split level
            if i > 0 && i < chunks.len() - 1 {
                assert!(chunk.len() > config.min_size());
                assert!(chunk.bits.is_some());
            }
        }

        // Verify: determinism - same input produces same chunks
        let chunks2 = chunk_bytes(data.clone(), config);
        assert_eq!(chunks.len(), chunks2.len());
        for (c1, c2) in chunks.iter().zip(chunks2.iter()) {
            assert_eq!(c1.data, c2.data);
            assert_eq!(c1.offset, c2.offset);
            assert_eq!(c1.bits, c2.bits);
            assert_eq!(c1.hash, c2.hash);
        }

        // Verify: boundaries do not depend on push segmentation
        if data.len() > 1 {
            let split_at = (data[0] as usize % (data.len() - 1)) + 1;
            let mut chunker = Chunker::new(config);
            let mut segmented = chunker.push(Bytes::copy_from_slice(&data[..split_at]));
            segmented.extend(chunker.push(Bytes::copy_from_slice(&data[split_at..])));
            segmented.extend(chunker.finish());

            assert_eq!(chunks.len(), segmented.len());
            for (c1, c2) in chunks.iter().zip(segmented.iter()) {
                assert_eq!(c1.offset, c2.offset);
                assert_eq!(c1.data, c2.data);
                assert_eq!(c1.bits, c2.bits);
            }
        }
    }

    // Test with hashing enabled
    let config_with_hash =
        ChunkConfig::default().with_hash_config(rollsplit::HashConfig::enabled());
    let chunks = chunk_bytes(data.clone(), config_with_hash);
    for chunk in &chunks {
        assert!(chunk.hash.is_some());
    }

    // Test with hashing disabled
    let config_no_hash = ChunkConfig::default().with_hash_config(rollsplit::HashConfig::disabled());
    let chunks = chunk_bytes(data, config_no_hash);
    for chunk in &chunks {
        assert!(chunk.hash.is_none());
    }
});
