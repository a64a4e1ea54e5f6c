#![warn(clippy::all, rust_2018_idioms)]

pub mod engine;
mod error;
mod geometry;
pub mod graph;

pub use engine::DiagramEdge;
pub use error::GraphError;
pub use geometry::{Bounds, Pos};
pub use graph::{ProximityGraph, SiteNode};
