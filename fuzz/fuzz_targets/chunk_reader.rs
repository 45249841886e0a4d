#![no_main]

use std::io::{Cursor, Read};

use libfuzzer_sys::fuzz_target;
use rollsplit::{chunk_bytes, ChunkConfig, ChunkIter};

/// A reader that returns at most `max` bytes per call, to exercise the
/// iterator's handling of short reads.
struct ShortReader<R> {
    inner: R,
    max: usize,
}

impl<R: Read> Read for ShortReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let end = buf.len().min(self.max);
        self.inner.read(&mut buf[..end])
    }
}

fuzz_target!(|data: Vec<u8>| {
    let configs = vec![
        ChunkConfig::new(4, 16, 64).unwrap(),
        ChunkConfig::new(64, 256, 1024).unwrap(),
        ChunkConfig::new(256, 4096, 16384).unwrap(),
    ];

    for config in configs {
        let expected = chunk_bytes(data.clone(), config);

        // Reading through a cursor must produce the same chunks
        let from_cursor: Vec<_> = ChunkIter::new(Cursor::new(&data[..]), config)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(expected.len(), from_cursor.len());
        for (c1, c2) in expected.iter().zip(from_cursor.iter()) {
            assert_eq!(c1.offset, c2.offset);
            assert_eq!(c1.data, c2.data);
            assert_eq!(c1.bits, c2.bits);
            assert_eq!(c1.hash, c2.hash);
        }

        // Short reads must not change boundaries either
        let max = (data.first().copied().unwrap_or(0) as usize % 7) + 1;
        let short = ShortReader {
            inner: Cursor::new(&data[..]),
            max,
        };
        let from_short: Vec<_> = ChunkIter::new(short, config)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(expected.len(), from_short.len());
        for (c1, c2) in expected.iter().zip(from_short.iter()) {
            assert_eq!(c1.offset, c2.offset);
            assert_eq!(c1.data, c2.data);
            assert_eq!(c1.bits, c2.bits);
        }
    }
});
