//! Analytics: period aggregation and terminal charts.

pub mod aggregator;
pub mod visualization;

pub use aggregator::{Bucket, Direction, Granularity, PeriodCursor, PeriodRange, PeriodReport};
