pub mod address;
pub mod conn;
pub mod pipe;
