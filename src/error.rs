use std::io;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConnError {
    #[error("use of closed network connection")]
    Closed,
}

impl From<ConnError> for io::Error {
    fn from(err: ConnError) -> io::Error {
        match err {
            ConnError::Closed => io::Error::new(io::ErrorKind::NotConnected, err),
        }
    }
}

/// The error returned for any I/O attempted on a closed connection.
pub fn closed() -> io::Error {
    ConnError::Closed.into()
}

pub fn is_closed(err: &io::Error) -> bool {
    err.get_ref()
        .and_then(|inner| inner.downcast_ref::<ConnError>())
        .map_or(false, |inner| *inner == ConnError::Closed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_error_is_not_connected() {
        let err = closed();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
        assert_eq!(err.to_string(), "use of closed network connection");
    }

    #[test]
    fn is_closed_detects_only_closed_errors() {
        assert!(is_closed(&closed()));
        assert!(!is_closed(&io::Error::new(
            io::ErrorKind::NotConnected,
            "not connected"
        )));
        assert!(!is_closed(&io::Error::from(io::ErrorKind::BrokenPipe)));
    }
}
