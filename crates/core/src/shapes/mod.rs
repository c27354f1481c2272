//! Built-in input shapes.

mod date_time;
mod time_only;

pub use date_time::DateTimeShape;
pub use time_only::TimeOnlyShape;
