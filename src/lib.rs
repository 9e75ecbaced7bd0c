//! Complex number arithmetic for the Mandelbrot renderer.

#[macro_use]
extern crate log;

mod complex;
mod error;

pub use complex::{Complex, EPSILON};
pub use error::ArithmeticError;
