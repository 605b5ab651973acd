use std::cmp::min;
use std::fmt;
use std::io::{self, Read, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use chrono::{DateTime, Utc};
use tracing::trace;

use super::address::MockAddress;
use super::pipe::{PipeReader, PipeWriter};
use crate::error;
use crate::net::Conn;

pub enum Sink {
    /// Accumulates everything written, for later inspection.
    Buffer(BytesMut),
    Pipe(PipeWriter),
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    pub fn contents(&self) -> Option<&[u8]> {
        match self {
            Sink::Buffer(buffer) => Some(&buffer[..]),
            _ => None,
        }
    }

    /// Drains a buffer sink. Other sinks have nothing to hand back.
    pub fn take(&mut self) -> Bytes {
        match self {
            Sink::Buffer(buffer) => buffer.split().freeze(),
            _ => Bytes::new(),
        }
    }
}

impl Default for Sink {
    fn default() -> Sink {
        Sink::Buffer(BytesMut::new())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Buffer(buffer) => {
                buffer.put_slice(buf);
                Ok(buf.len())
            }
            Sink::Pipe(writer) => writer.write(buf),
            Sink::Writer(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Buffer(_) => Ok(()),
            Sink::Pipe(writer) => writer.flush(),
            Sink::Writer(writer) => writer.flush(),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Buffer(buffer) => f.debug_tuple("Buffer").field(buffer).finish(),
            Sink::Pipe(writer) => f.debug_tuple("Pipe").field(writer).finish(),
            Sink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

#[derive(Default)]
pub enum Source {
    /// Nothing to read; every read reports end of stream.
    #[default]
    Empty,
    Buffer(Bytes),
    Pipe(PipeReader),
    Reader(Box<dyn Read + Send>),
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Source::Empty => Ok(0),
            Source::Buffer(bytes) => {
                let len_to_copy = min(bytes.len(), buf.len());
                buf[..len_to_copy].copy_from_slice(&bytes[..len_to_copy]);
                bytes.advance(len_to_copy);
                Ok(len_to_copy)
            }
            Source::Pipe(reader) => reader.read(buf),
            Source::Reader(reader) => reader.read(buf),
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Empty => f.write_str("Empty"),
            Source::Buffer(bytes) => f.debug_tuple("Buffer").field(bytes).finish(),
            Source::Pipe(reader) => f.debug_tuple("Pipe").field(reader).finish(),
            Source::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

/// Open until `close` is called. Only the open state can be built outside
/// this crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CloseFlag(bool);

/// Bytes handed to `write` go to `incoming`, and `read` is served from
/// `outgoing`.
#[derive(Debug, Default)]
pub struct MockConnection {
    pub local_network: String,
    pub local_address: String,
    pub remote_network: String,
    pub remote_address: String,

    pub incoming: Sink,
    pub outgoing: Source,

    pub closed: CloseFlag,
}

impl MockConnection {
    pub fn new() -> MockConnection {
        MockConnection::default()
    }

    pub fn with_local(mut self, network: impl Into<String>, address: impl Into<String>) -> Self {
        self.local_network = network.into();
        self.local_address = address.into();
        self
    }

    pub fn with_remote(mut self, network: impl Into<String>, address: impl Into<String>) -> Self {
        self.remote_network = network.into();
        self.remote_address = address.into();
        self
    }

    pub fn with_outgoing(mut self, data: impl Into<Bytes>) -> Self {
        self.outgoing = Source::Buffer(data.into());
        self
    }

    pub fn with_reader(mut self, reader: impl Read + Send + 'static) -> Self {
        self.outgoing = Source::Reader(Box::new(reader));
        self
    }

    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.incoming = Sink::Writer(Box::new(writer));
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed.0
    }
}

impl Read for MockConnection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.closed.0 {
            return Err(error::closed());
        }
        self.outgoing.read(buf)
    }
}

impl Write for MockConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed.0 {
            return Err(error::closed());
        }
        self.incoming.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.closed.0 {
            return Err(error::closed());
        }
        self.incoming.flush()
    }
}

impl Conn for MockConnection {
    type Addr = MockAddress;

    fn local_addr(&self) -> MockAddress {
        MockAddress::new(self.local_network.as_str(), self.local_address.as_str())
    }

    fn remote_addr(&self) -> MockAddress {
        MockAddress::new(self.remote_network.as_str(), self.remote_address.as_str())
    }

    // Leaves `incoming` and `outgoing` alone, a pipe peer may still hold the
    // other half. A peer blocked on this connection stays blocked.
    fn close(&mut self) -> io::Result<()> {
        trace!(local = %self.local_address, remote = %self.remote_address, "closing mock connection");
        self.closed = CloseFlag(true);
        Ok(())
    }

    fn set_read_deadline(&mut self, deadline: Option<DateTime<Utc>>) -> io::Result<()> {
        trace!(?deadline, "ignoring read deadline");
        Ok(())
    }

    fn set_write_deadline(&mut self, deadline: Option<DateTime<Utc>>) -> io::Result<()> {
        trace!(?deadline, "ignoring write deadline");
        Ok(())
    }
}
