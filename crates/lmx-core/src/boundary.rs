use std::io::{ErrorKind, Read};

use lmx_store::{ByteSource, StoreResult};
use tracing::debug;

use crate::config::DEFAULT_SCAN_CHUNK_SIZE;
use crate::tokens::is_line_terminator;

/// Finds where the first whole line of a partition begins.
///
/// A partition that starts mid-line leaves that line to the partition before
/// it. The resolver streams forward from the candidate start in fixed-size
/// chunks and stops at the first terminator, so it never reads more of the
/// object than the length of the straddling line.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryResolver {
    chunk_size: usize,
}

impl BoundaryResolver {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Return the offset just past the first `\n` or `\r` at or after
    /// `start`, or `start` itself if no terminator occurs before
    /// `total_length`.
    pub fn resolve<S>(&self, source: &S, start: u64, total_length: u64) -> StoreResult<u64>
    where
        S: ByteSource + ?Sized,
    {
        let mut stream = source.open_stream(start)?;
        let mut buf = vec![0u8; self.chunk_size];
        let mut pos = start;

        while pos < total_length {
            let want = (total_length - pos).min(self.chunk_size as u64) as usize;
            let n = match stream.read(&mut buf[..want]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if let Some(i) = buf[..n].iter().position(|b| is_line_terminator(*b)) {
                let resolved = pos + i as u64 + 1;
                debug!(start, resolved, "resolved line boundary");
                return Ok(resolved);
            }
            pos += n as u64;
        }

        debug!(start, "no line terminator before end of object");
        Ok(start)
    }
}

impl Default for BoundaryResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_CHUNK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lmx_store::InMemoryByteSource;

    fn resolve(data: &str, start: u64, chunk: usize) -> u64 {
        let source = InMemoryByteSource::new(data);
        BoundaryResolver::new(chunk)
            .resolve(&source, start, data.len() as u64)
            .unwrap()
    }

    #[test]
    fn skips_to_after_next_newline() {
        // "word1 word2 word3\n" ends at offset 18.
        assert_eq!(resolve("word1 word2 word3\na b c\n", 3, 1024), 18);
    }

    #[test]
    fn start_on_terminator_moves_one_past() {
        assert_eq!(resolve("abc\ndef\n", 3, 1024), 4);
    }

    #[test]
    fn carriage_return_terminates() {
        assert_eq!(resolve("abc\rdef", 1, 1024), 4);
    }

    #[test]
    fn crlf_stops_at_the_carriage_return() {
        assert_eq!(resolve("ab\r\ncd", 1, 1024), 3);
    }

    #[test]
    fn scans_across_many_small_chunks() {
        let line = "x".repeat(50);
        let data = format!("{line}\nnext");
        assert_eq!(resolve(&data, 5, 4), 51);
    }

    #[test]
    fn unterminated_tail_returns_start() {
        assert_eq!(resolve("abc\ndef ghi", 6, 2), 6);
    }

    #[test]
    fn stops_at_total_length() {
        // A terminator beyond the stated total length is never seen.
        let source = InMemoryByteSource::new("abcdef\n");
        let resolved = BoundaryResolver::new(2).resolve(&source, 1, 5).unwrap();
        assert_eq!(resolved, 1);
    }

    #[test]
    fn zero_chunk_size_scans_byte_by_byte() {
        assert_eq!(resolve("abcd\nef", 1, 0), 5);
    }
}
