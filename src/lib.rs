//! Parsing and block statistics for Blender `.blend` files.

/// Blend container parsing and statistics aggregation.
pub mod blend;
