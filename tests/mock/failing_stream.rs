use std::io::{Error, ErrorKind, Read, Write};

pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> Result<usize, Error> {
        Err(Error::new(ErrorKind::PermissionDenied, "permission denied"))
    }
}

pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> Result<usize, Error> {
        Err(Error::new(ErrorKind::ConnectionReset, "connection reset"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(Error::new(ErrorKind::ConnectionReset, "connection reset"))
    }
}

/// Hands out its data a few bytes at a time, the way a socket might.
pub struct TrickleReader {
    data: Vec<u8>,
    step: usize,
}

impl TrickleReader {
    pub fn new(data: &[u8], step: usize) -> TrickleReader {
        TrickleReader {
            data: data.to_vec(),
            step,
        }
    }
}

impl Read for TrickleReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let len_to_copy = self.step.min(buf.len()).min(self.data.len());
        buf[..len_to_copy].copy_from_slice(&self.data[..len_to_copy]);
        self.data.drain(..len_to_copy);
        Ok(len_to_copy)
    }
}
