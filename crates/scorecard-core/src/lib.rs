//! scorecard-core — Attempt scoring, review, and statistics.
//!
//! This crate defines the data model for graded attempt snapshots, the
//! pure review and statistics functions over them, and the validated
//! boundary where upstream JSON becomes typed data.

pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod review;
pub mod statistics;
