//! Pion spectrum: two-pion energy levels in a finite periodic box
//!
//!
//! # Introduction (for the physicist)
//!
//! Lattice QCD computations are carried out in a finite cubic box of side L
//! with periodic boundary conditions. In such a box, particle momenta are
//! quantized as p = (2π/L)·n, where n is a triple of integers, and so the
//! energy of a pair of free pions can only take discrete values.
//!
//! This program plots those free two-pion center-of-mass energies as a
//! function of L, for every distinct momentum configuration of a given total
//! momentum class |d|². It is the non-interacting reference against which
//! lattice energy levels can be compared.
//!
//!
//! # Introduction (for the computer guy)
//!
//! The program runs in three steps:
//!
//! * ask the user for the squared total momentum |d|² of interest
//! * enumerate total momenta d of that class and first pion momenta n,
//!   keeping one (n, d) configuration per distinct energy at a reference L
//! * draw the two-pion threshold and each energy level in an SVG figure, and
//!   open it in the system viewer.

#![warn(missing_docs)]

pub mod box_sizes;
pub mod config;
pub mod input;
pub mod numeric;
pub mod physics;
pub mod plot;
pub mod quanta;
pub mod spectrum;

/// We'll use eyre's type-erased result type throughout the library
pub type Result<T> = eyre::Result<T>;
