use std::cmp::min;
use std::io::{self, Read, Write};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

use bytes::{Buf, Bytes};
use tracing::debug;

use super::conn::{MockConnection, Sink, Source};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeConfig {
    /// Number of written chunks a channel may hold before `write` blocks.
    /// Zero makes every write wait for a matching read.
    pub capacity: usize,
}

impl PipeConfig {
    pub fn new() -> PipeConfig {
        PipeConfig::default()
    }

    pub fn capacity(mut self, capacity: usize) -> PipeConfig {
        self.capacity = capacity;
        self
    }
}

#[derive(Debug)]
pub struct PipeWriter {
    tx: SyncSender<Bytes>,
}

#[derive(Debug)]
pub struct PipeReader {
    rx: Receiver<Bytes>,
    pending: Bytes,
}

pub fn channel(capacity: usize) -> (PipeWriter, PipeReader) {
    let (tx, rx) = sync_channel(capacity);
    (
        PipeWriter { tx },
        PipeReader {
            rx,
            pending: Bytes::new(),
        },
    )
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        match self.tx.send(Bytes::copy_from_slice(buf)) {
            Ok(()) => Ok(buf.len()),
            Err(_) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "pipe reader has been dropped",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.pending.is_empty() {
            match self.rx.recv() {
                Ok(chunk) => self.pending = chunk,
                // Writer is gone and nothing is queued
                Err(_) => return Ok(0),
            }
        }

        let len_to_copy = min(self.pending.len(), buf.len());
        buf[..len_to_copy].copy_from_slice(&self.pending[..len_to_copy]);
        self.pending.advance(len_to_copy);
        Ok(len_to_copy)
    }
}

/// Whatever is written to one connection can be read from the other. Both
/// ends block, so drive them from different threads.
pub fn pipe(a: MockConnection, b: MockConnection) -> (MockConnection, MockConnection) {
    pipe_with_config(a, b, PipeConfig::default())
}

pub fn pipe_with_config(
    mut a: MockConnection,
    mut b: MockConnection,
    config: PipeConfig,
) -> (MockConnection, MockConnection) {
    let (a_to_b_tx, a_to_b_rx) = channel(config.capacity);
    let (b_to_a_tx, b_to_a_rx) = channel(config.capacity);

    a.incoming = Sink::Pipe(a_to_b_tx);
    b.outgoing = Source::Pipe(a_to_b_rx);
    b.incoming = Sink::Pipe(b_to_a_tx);
    a.outgoing = Source::Pipe(b_to_a_rx);

    debug!(
        a_local = %a.local_address,
        a_remote = %a.remote_address,
        b_local = %b.local_address,
        b_remote = %b.remote_address,
        capacity = config.capacity,
        "piped mock connections"
    );

    (a, b)
}
