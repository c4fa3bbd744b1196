// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod http;
pub mod render;
pub mod storage;
