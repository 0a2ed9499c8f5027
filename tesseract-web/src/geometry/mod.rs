//! Geometry module - 4D hypercube, plane rotations, projection and trails
//!
//! Re-exports only. All logic in submodules.

mod rotation;
mod topology;
mod projection;
mod trail;

pub use rotation::{rotation_xw, rotation_yw, rotation_zw, rotate, differing_axes};
pub use topology::{HypercubeTopology, Edge, generate_vertices, generate_edges, VERTEX_COUNT, EDGE_COUNT};
pub use projection::{RotationState, RotationProjector, Projected};
pub use trail::TrailHistory;
