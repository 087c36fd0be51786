//! Standard-input accumulation
//!
//! Chunks are decoded incrementally, so a multibyte character split across two
//! reads decodes the same as an unsplit one. Nothing is handed out before
//! [`StreamAccumulator::finish`], the end-of-stream event.

use encoding_rs::{CoderResult, Decoder, UTF_8};
use std::io::{self, Read};

const CHUNK_SIZE: usize = 64 * 1024;

pub struct StreamAccumulator {
    decoder: Decoder,
    text: String,
    had_errors: bool,
}

impl Default for StreamAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamAccumulator {
    pub fn new() -> Self {
        Self {
            decoder: UTF_8.new_decoder_without_bom_handling(),
            text: String::new(),
            had_errors: false,
        }
    }

    /// Append one chunk as delivered by the stream.
    pub fn push(&mut self, chunk: &[u8]) {
        self.decode(chunk, false);
    }

    /// Signal end-of-stream and take the accumulated text.
    ///
    /// Malformed or truncated sequences come out as U+FFFD.
    pub fn finish(mut self) -> String {
        self.decode(&[], true);
        if self.had_errors {
            tracing::warn!("Input stream contained invalid UTF-8; replaced with U+FFFD");
        }
        self.text
    }

    fn decode(&mut self, mut src: &[u8], last: bool) {
        loop {
            let needed = self.decoder.max_utf8_buffer_length(src.len()).unwrap_or(src.len() * 3 + 4);
            self.text.reserve(needed);

            let (result, read, had_errors) = self.decoder.decode_to_string(src, &mut self.text, last);
            self.had_errors |= had_errors;
            src = &src[read..];
            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }
    }
}

/// Read `reader` to end-of-stream and return everything it delivered.
pub fn read_stream<R: Read>(mut reader: R) -> io::Result<String> {
    let mut accumulator = StreamAccumulator::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut chunks = 0usize;

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                chunks += 1;
                accumulator.push(&buf[..n]);
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    tracing::debug!("Read {} chunks from stdin", chunks);
    Ok(accumulator.finish())
}
