use thiserror::Error;

/// An arithmetic operation that is mathematically undefined for its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("reciprocal of zero")]
    ReciprocalOfZero,
    #[error("division by zero")]
    DivisionByZero,
}

//--------------------------------------------------------------------------------------------------
