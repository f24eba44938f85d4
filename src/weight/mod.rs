pub mod buffer;
pub mod screen;

pub use buffer::{Key, WeightEntryBuffer};
pub use screen::{ChartData, ChartPoint, WeightScreen, header_date, submit_weight};
