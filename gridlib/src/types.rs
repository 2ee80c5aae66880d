//! Primitive data types.

/// Data type for vertex indices.
pub type VertexIndex = usize;
/// Data type for line weights and path costs.
pub type Cost = u64;

/// Index of the power station. Every other vertex is a house.
pub const POWER_SOURCE: VertexIndex = 0;
