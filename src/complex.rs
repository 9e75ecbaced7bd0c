use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use crate::error::ArithmeticError;

/// Default tolerance for comparing values produced by trigonometric functions.
pub const EPSILON: f64 = 1e-9;

/// An immutable complex number `real + imaginary·i`.
///
/// Equality is exact and structural. Use [`Complex::approx_eq`] when comparing results of
/// floating point computations that are only expected to agree within a tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);

    pub const fn new(real: f64, imaginary: f64) -> Complex {
        Complex { real, imaginary }
    }

    /// The point on the unit circle at `angle` radians.
    pub fn rotation(angle: f64) -> Complex {
        Complex::new(angle.cos(), angle.sin())
    }

    /// Embeds a real scalar in the complex plane.
    pub const fn real(x: f64) -> Complex {
        Complex::new(x, 0.0)
    }

    pub fn real_part(&self) -> f64 {
        self.real
    }

    pub fn imaginary_part(&self) -> f64 {
        self.imaginary
    }

    pub fn negate(&self) -> Complex {
        -*self
    }

    pub fn conjugate(&self) -> Complex {
        Complex::new(self.real, -self.imaginary)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: Complex) -> Complex {
        *self + other
    }

    pub fn subtract(&self, other: Complex) -> Complex {
        *self - other
    }

    pub fn multiply(&self, other: Complex) -> Complex {
        *self * other
    }

    pub fn scale(&self, lambda: f64) -> Complex {
        Complex::new(self.real * lambda, self.imaginary * lambda)
    }

    /// The multiplicative inverse, `conjugate / squared_modulus`.
    ///
    /// Both components are first divided by the larger one (Smith's method) so the squared
    /// modulus is never formed directly. Any non-zero value with a representable inverse
    /// succeeds, however small or large its components are.
    pub fn reciprocal(&self) -> Result<Complex, ArithmeticError> {
        if *self == Complex::ZERO {
            debug!("rejected reciprocal of {}", self);
            return Err(ArithmeticError::ReciprocalOfZero);
        }
        let (re, im) = (self.real, self.imaginary);

        if re.abs() >= im.abs() {
            let ratio = im / re;
            let denom = re + im * ratio;
            Ok(Complex::new(1.0 / denom, -ratio / denom))
        } else {
            let ratio = re / im;
            let denom = re * ratio + im;
            Ok(Complex::new(ratio / denom, -1.0 / denom))
        }
    }

    pub fn divide(&self, divisor: Complex) -> Result<Complex, ArithmeticError> {
        if divisor == Complex::ZERO {
            debug!("rejected division of {} by zero", self);
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(*self * divisor.reciprocal()?)
    }

    /// `real² + imaginary²`, which avoids the square root of [`Complex::modulus`].
    pub fn squared_modulus(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    pub fn modulus(&self) -> f64 {
        self.squared_modulus().sqrt()
    }

    /// Raises this number to the power `n` by repeated multiplication.
    ///
    /// `pow(0)` is [`Complex::ONE`] for every value, zero included.
    pub fn pow(&self, n: u32) -> Complex {
        if n == 0 {
            return Complex::ONE;
        }
        (1..n).fold(*self, |acc, _| acc * *self)
    }

    /// Returns true if both components differ by no more than `epsilon`.
    pub fn approx_eq(&self, other: &Complex, epsilon: f64) -> bool {
        (self.real - other.real).abs() <= epsilon
            && (self.imaginary - other.imaginary).abs() <= epsilon
    }
}

impl From<f64> for Complex {
    fn from(x: f64) -> Complex {
        Complex::real(x)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Complex{{real={:?}, imaginary={:?}}}", self.real, self.imaginary)
    }
}

// -0.0 == 0.0 so both must hash the same
fn hash_bits(x: f64) -> u64 {
    if x == 0.0 { 0 } else { x.to_bits() }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.real).hash(state);
        hash_bits(self.imaginary).hash(state);
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.real, -self.imaginary)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.real + other.real, self.imaginary + other.imaginary)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.real - other.real, self.imaginary - other.imaginary)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(self.real * other.real - self.imaginary * other.imaginary,
                     self.real * other.imaginary + self.imaginary * other.real)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, lambda: f64) -> Complex {
        self.scale(lambda)
    }
}

//--------------------------------------------------------------------------------------------------
