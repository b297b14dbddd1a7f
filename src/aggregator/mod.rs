// file: src/aggregator/mod.rs
// description: aggregation module exports
// reference: internal module structure

pub mod engine;

pub use engine::AggregationEngine;
