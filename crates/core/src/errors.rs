//! Error types and handling
//!
//! Invalid structural options (empty title, empty border glyph, unknown
//! alignment) are hard errors. Cosmetic problems (unknown color name,
//! unsatisfiable width) are not errors: the renderer degrades and logs a
//! warning instead, so a banner is always produced for a structurally
//! valid configuration.

use thiserror::Error;

/// Errors raised while validating banner options
#[derive(Error, Debug)]
pub enum ProemError {
    /// The title is required and must contain at least one character
    #[error("Title must not be empty")]
    EmptyTitle,

    /// The border glyph must contain at least one character
    #[error("Border character must not be empty")]
    EmptyBorderChar,

    /// Unrecognized alignment name
    #[error("Invalid alignment '{value}': expected one of 'left', 'center', 'right'")]
    InvalidAlignment { value: String },
}

/// Convenience type alias for Results with ProemError
pub type Result<T> = std::result::Result<T, ProemError>;
