//! Integration tests for tint crates.
//!
//! End-to-end checks across `tint-core` and `tint-color`: exhaustive 8-bit
//! round trips, dispatch coverage over every pair of color spaces, blending
//! boundaries, and serialization of pixel values.
