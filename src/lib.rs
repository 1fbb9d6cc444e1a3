//! touchchart: touch-driven charting core.
//!
//! This crate provides the coordinate-transform / viewport-gesture engine,
//! the range-aggregating data model, and the polyline simplifier behind an
//! interactive chart. Drawing, text layout, and platform view plumbing are
//! external collaborators that consume this core's outputs.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, PointerOutcome};
pub use error::{ChartError, ChartResult};
