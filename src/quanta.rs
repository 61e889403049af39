//! Integer momentum quanta of particles in a cubic periodic box
//!
//! In a periodic box of side L, momenta are quantized as p = (2π/L)·n where n
//! is a triple of integers. The same representation is used for the total
//! momentum of a two-particle system, which we call the boost d.

use nalgebra::SVector;

use std::ops::Range;

/// Number of spatial dimensions of the box
pub const SPACE_DIM: usize = 3;

/// Triple of integer momentum quanta along the x, y and z axes
pub type Quanta = SVector<i32, SPACE_DIM>;

/// Build a triple of momentum quanta
pub fn quanta(n1: i32, n2: i32, n3: i32) -> Quanta {
    Quanta::new(n1, n2, n3)
}

/// Squared magnitude n1² + n2² + n3² of a triple of momentum quanta
pub fn squared_norm(n: &Quanta) -> i32 {
    n.dot(n)
}

/// Half-open ranges of integer quanta along each axis
///
/// Iterating over a `QuantaRanges` yields every triple in the cartesian product
/// of its ranges, with the first axis varying slowest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantaRanges {
    /// Range of quanta along each axis (x, y, z)
    pub axes: [Range<i32>; SPACE_DIM],
}
//
impl QuantaRanges {
    /// Build ranges from one range per axis
    pub fn new(x: Range<i32>, y: Range<i32>, z: Range<i32>) -> Self {
        Self { axes: [x, y, z] }
    }

    /// Number of triples that iteration will yield
    pub fn len(&self) -> usize {
        self.axes.iter().map(|axis| axis.len()).product()
    }

    /// Truth that iteration will yield nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all triples, x outermost and z innermost
    pub fn iter(&self) -> impl Iterator<Item = Quanta> + '_ {
        let [x, y, z] = &self.axes;
        x.clone().flat_map(move |n1| {
            y.clone()
                .flat_map(move |n2| z.clone().map(move |n3| quanta(n1, n2, n3)))
        })
    }
}
