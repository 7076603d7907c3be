use std::io::{self, Write};

/// A writer that remembers everything written to it and counts explicit flushes.
///
/// The flush count is the whole point: it makes "how often did this code force a flush" an
/// assertable fact instead of a style argument.
#[derive(Debug, Default)]
#[allow(unused)]
pub struct FlushCounter {
    written: Vec<u8>,
    flushes: usize,
}

impl FlushCounter {
    #[allow(unused)]
    pub const fn new() -> FlushCounter {
        FlushCounter {
            written: Vec::new(),
            flushes: 0,
        }
    }

    #[allow(unused)]
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    #[allow(unused)]
    pub const fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Write for FlushCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
