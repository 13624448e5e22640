//! Byte sinks for usage rendering.
//!
//! Rendering pushes small byte slices into a [`Sink`]; a sink may refuse a
//! slice, which stops rendering early without an error. That keeps the
//! renderer free of I/O types and lets callers write into growable buffers,
//! fixed buffers with a flush callback, or any [`std::io::Write`].

use std::io;

pub trait Sink {
    /// Accept `bytes`, returning `false` to refuse them and stop the caller.
    fn put(&mut self, bytes: &[u8]) -> bool;
}

impl Sink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) -> bool {
        self.extend_from_slice(bytes);
        true
    }
}

/// Adapter writing into any [`io::Write`]; the first write error refuses all
/// further input and is kept for inspection.
pub struct IoSink<W> {
    writer: W,
    err: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        IoSink { writer, err: None }
    }

    /// The write error that stopped the sink, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.err.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn put(&mut self, bytes: &[u8]) -> bool {
        if self.err.is_some() {
            return false;
        }
        match self.writer.write_all(bytes) {
            Ok(()) => true,
            Err(e) => {
                self.err = Some(e);
                false
            }
        }
    }
}

/// Fixed-capacity buffer that hands full chunks to a flush callback. A slice
/// larger than the remaining space flushes the buffer first; a slice larger
/// than the whole capacity is passed through directly.
pub struct BufSink<F> {
    buf: Vec<u8>,
    cap: usize,
    flush: F,
}

impl<F: FnMut(&[u8]) -> bool> BufSink<F> {
    pub fn new(cap: usize, flush: F) -> Self {
        BufSink {
            buf: Vec::with_capacity(cap),
            cap,
            flush,
        }
    }

    /// Hand any buffered bytes to the callback.
    pub fn flush(&mut self) -> bool {
        if self.buf.is_empty() {
            return true;
        }
        let ok = (self.flush)(&self.buf);
        self.buf.clear();
        ok
    }
}

impl<F: FnMut(&[u8]) -> bool> Sink for BufSink<F> {
    fn put(&mut self, bytes: &[u8]) -> bool {
        if self.buf.len() + bytes.len() > self.cap && !self.flush() {
            return false;
        }
        if bytes.len() > self.cap {
            return (self.flush)(bytes);
        }
        self.buf.extend_from_slice(bytes);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_accumulates() {
        let mut out = Vec::new();
        assert!(out.put(b"ab"));
        assert!(out.put(b"c"));
        assert_eq!(out, b"abc");
    }

    #[test]
    fn io_sink_stops_on_the_first_error() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = IoSink::new(Broken);
        assert!(!sink.put(b"x"));
        assert!(!sink.put(b"y"));
        assert_eq!(sink.error().map(|e| e.kind()), Some(io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn buf_sink_flushes_full_chunks() {
        let mut chunks: Vec<Vec<u8>> = Vec::new();
        {
            let mut sink = BufSink::new(4, |b: &[u8]| {
                chunks.push(b.to_vec());
                true
            });
            assert!(sink.put(b"ab"));
            assert!(sink.put(b"cd")); // fits exactly, no flush yet
            assert!(sink.put(b"e")); // forces a flush of "abcd"
            assert!(sink.flush());
        }
        assert_eq!(chunks, [b"abcd".to_vec(), b"e".to_vec()]);
    }

    #[test]
    fn buf_sink_passes_oversized_slices_through() {
        let mut chunks: Vec<Vec<u8>> = Vec::new();
        {
            let mut sink = BufSink::new(2, |b: &[u8]| {
                chunks.push(b.to_vec());
                true
            });
            assert!(sink.put(b"x"));
            assert!(sink.put(b"long slice"));
            assert!(sink.flush());
        }
        assert_eq!(chunks, [b"x".to_vec(), b"long slice".to_vec()]);
    }

    #[test]
    fn buf_sink_refusal_propagates() {
        let mut sink = BufSink::new(1, |_: &[u8]| false);
        assert!(sink.put(b"a"));
        assert!(!sink.put(b"b"));
    }
}
