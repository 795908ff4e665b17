//! CLI library components for the cipher visualizer.

pub mod logging;
pub mod render;
pub mod request;
pub mod step;
