use std::io::{self, Read, Write};

use chrono::{DateTime, Utc};

pub trait Addr {
    /// e.g. "tcp" or "udp"
    fn network(&self) -> &str;

    fn address(&self) -> &str;
}

pub trait Conn: Read + Write {
    type Addr: Addr;

    fn local_addr(&self) -> Self::Addr;

    fn remote_addr(&self) -> Self::Addr;

    fn close(&mut self) -> io::Result<()>;

    /// `None` clears the deadline.
    fn set_deadline(&mut self, deadline: Option<DateTime<Utc>>) -> io::Result<()> {
        self.set_read_deadline(deadline)?;
        self.set_write_deadline(deadline)
    }

    fn set_read_deadline(&mut self, deadline: Option<DateTime<Utc>>) -> io::Result<()>;

    fn set_write_deadline(&mut self, deadline: Option<DateTime<Utc>>) -> io::Result<()>;
}
