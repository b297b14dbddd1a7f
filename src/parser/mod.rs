// file: src/parser/mod.rs
// description: log line parsing module exports
// reference: internal module structure

pub mod line;
pub mod patterns;

pub use line::LineParser;
