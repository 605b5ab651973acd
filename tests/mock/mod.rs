#![allow(dead_code)]

pub mod failing_stream;
pub mod logging;
