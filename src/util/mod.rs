pub mod common;
pub mod log;
pub mod misc;
pub mod string;
