//! Lower-level components used throughout the canvas.

pub mod speed_gauge;
