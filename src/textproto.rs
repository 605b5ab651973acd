use std::io::{self, BufRead, BufReader, Read, Write};

pub fn format_line(line: &str) -> String {
    format!("{}\r\n", line)
}

#[derive(Debug)]
pub struct TextConn<C: Read + Write> {
    reader: BufReader<C>,
}

impl<C: Read + Write> TextConn<C> {
    pub fn new(conn: C) -> TextConn<C> {
        TextConn {
            reader: BufReader::new(conn),
        }
    }

    pub fn print_line(&mut self, line: &str) -> io::Result<()> {
        let conn = self.reader.get_mut();
        conn.write_all(format_line(line).as_bytes())?;
        conn.flush()
    }

    /// Reads one line and returns it without its line ending. Both CRLF and
    /// bare LF terminate a line; a final unterminated line is returned as is.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection ended before a line was read",
            ));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn get_ref(&self) -> &C {
        self.reader.get_ref()
    }

    pub fn get_mut(&mut self) -> &mut C {
        self.reader.get_mut()
    }

    /// Returns the connection. Bytes already buffered for reading are lost.
    pub fn into_inner(self) -> C {
        self.reader.into_inner()
    }
}
