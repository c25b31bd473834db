//! Validation functionality
//!
//! Provides the building blocks every property write is checked against:
//! - Prefix registry (closed set of known vocabularies)
//! - Key codec (attribute-style names vs canonical keys)
//! - Validation errors

pub mod error;
pub mod keys;
pub mod prefixes;

pub use error::{ValidationError, ValidationResult};
pub use keys::{KeyCodec, RESERVED_KEYS};
pub use prefixes::{KNOWN_PREFIXES, PrefixRegistry};
