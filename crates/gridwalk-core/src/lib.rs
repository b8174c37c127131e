//! **gridwalk-core**: coordinates and metrics for grid search.
//!
//! This crate provides the geometry shared across the *gridwalk* workspace:
//! the unbounded integer [`Point`], the half-open [`Range`] used to describe
//! a visible viewport, and the [`manhattan`] metric.

pub mod distance;
pub mod geom;

pub use distance::{is_adjacent_4, manhattan};
pub use geom::{ParsePointError, Point, Range};
