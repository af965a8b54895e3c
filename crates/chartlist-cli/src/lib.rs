//! CLI library components for the chartlist viewer.

pub mod logging;
pub mod pipeline;
