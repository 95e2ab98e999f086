// Chart data module
pub mod color;
pub mod normalize;

pub use color::{ColorAssigner, DEFAULT_PALETTE, MIN_PALETTE_SIZE};
pub use normalize::{CHART_LABEL_LEN, ChartDatum, from_distribution, normalize};
