use thiserror::Error;

// ---------------------------------------------------------------------------
// Closed error taxonomy for the evaluation pipeline
// ---------------------------------------------------------------------------

/// Everything that can go wrong between a table file and a final value.
///
/// Exactly two call sites inspect variants and recover:
/// * [`eval::special::rrz`](crate::eval::special::rrz) catches [`Domain`]
///   and substitutes an alternate algorithm;
/// * [`eval::compose::fun`](crate::eval::compose::fun) catches
///   [`TableUnavailable`] and substitutes a closed-form value.
///
/// Every other frame propagates with `?`.
///
/// [`Domain`]: EvalError::Domain
/// [`TableUnavailable`]: EvalError::TableUnavailable
#[derive(Debug, Error)]
pub enum EvalError {
    /// A table file could not be opened or read.
    #[error("File error: cannot open {file}")]
    TableUnavailable { file: String },

    /// A table row contained a token that is not a number
    /// (after comma→dot normalization).
    #[error("Parse error: '{token}' in {file} is not a number")]
    NumericParse { file: String, token: String },

    /// Both discriminant branches of `srs` were non-positive:
    /// no valid expression under the square root.
    #[error("Domain error: invalid expression under root")]
    Domain,
}

pub type Result<T> = std::result::Result<T, EvalError>;
