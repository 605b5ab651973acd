pub mod error;
pub mod mock;
pub mod net;
pub mod textproto;

pub use error::ConnError;
pub use mock::address::MockAddress;
pub use mock::conn::{CloseFlag, MockConnection, Sink, Source};
pub use mock::pipe::{channel, pipe, pipe_with_config, PipeConfig, PipeReader, PipeWriter};
pub use net::{Addr, Conn};
pub use textproto::TextConn;
