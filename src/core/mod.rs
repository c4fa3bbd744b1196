pub mod analyzer;
pub mod engine;
pub mod formatter;
pub mod segmenter;
