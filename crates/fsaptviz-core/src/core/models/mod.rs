//! Data structures shared by every layer: per-atom interaction samples and the
//! display colors assigned to them.

pub mod color;
pub mod sample;
