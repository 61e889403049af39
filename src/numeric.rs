//! Basic numerical concepts used throughout the program

#![allow(missing_docs)]

use num_traits::AsPrimitive;

// Floating-point precision is configured here
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f32")]
pub use std::f32 as floats;
#[cfg(not(feature = "f32"))]
pub type Float = f64;
#[cfg(not(feature = "f32"))]
pub use std::f64 as floats;

/// Mathematical functions
pub mod functions {
    use super::*;

    /// Convert an integer quantity (e.g. a squared norm) to our float type
    ///
    /// Exact for the small squared norms we deal with, in both precisions.
    pub fn to_float(x: i32) -> Float {
        x.as_()
    }

    /// Square of a floating-point number
    pub fn sqr(x: Float) -> Float {
        x * x
    }
}
