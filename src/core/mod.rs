pub mod axis;
pub mod data;
pub mod entry;
pub mod matrix;
pub mod series;
pub mod simplify;
pub mod transform;
pub mod types;
pub mod viewport;

pub use axis::{AxisKind, AxisRange};
pub use data::ChartData;
pub use entry::Entry;
pub use matrix::Matrix23;
pub use series::{Rounding, Series};
pub use simplify::{Simplified, simplify};
pub use transform::Transformer;
pub use types::{AxisSide, ContentRect, PixelPoint, ValuePoint};
pub use viewport::{ViewportState, ViewportTuning};
