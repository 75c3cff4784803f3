//! Image transformation: quarter-turn rotation and resizing.
//!
//! Rotation is non-destructive. The editor keeps the angle as state and
//! draws the source image through it only when a filter is applied or the
//! output is requested.
//!
//! # Transform Order
//!
//! When rendering, operations are applied in this order:
//! 1. Rotation (onto a surface of swapped size for 90/270)
//! 2. Pixel filter
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise (y axis points down)
//! - Origin is top-left corner

mod resize;
mod rotation;

pub use resize::{resize, ResizeError};
pub use rotation::{apply_rotation, compute_rotated_bounds, Rotation, RotationError};
