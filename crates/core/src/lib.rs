//! Core library for the proem banner renderer
//!
//! This crate contains the layout engine, color and terminal handling,
//! logging setup, and error types behind the `proem` CLI. The main entry
//! point is [`proem::Proem::builder`].

pub mod color;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod proem;
pub mod term;

/// Get the version of the core library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let version = version();
        assert!(!version.is_empty());
        assert!(version.contains('.'));
    }
}
