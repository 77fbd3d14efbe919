pub mod common;
pub mod fields;
pub mod graph;
pub mod render;
pub mod stats;
