//! Ops helpers built on the ranking order

pub mod plan;

pub use plan::{restart_order, scale_in_candidates};
