//! Error types for metadata validation

use thiserror::Error;

/// Errors raised when a write would leave a metadata node invalid.
///
/// Every variant is raised at the point of mutation; the node keeps its
/// last valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Key is neither reserved, declared, vocabulary-prefixed nor absolute
    #[error(
        "invalid property name '{name}': common properties must be a reserved keyword \
         (id, type, context), of the form prefix:name where prefix is defined within \
         the CSVW context, or an absolute URL"
    )]
    InvalidPropertyName { name: String },

    /// Value fails the type or shape check of its property
    #[error("invalid value for '{property}': {reason}")]
    InvalidPropertyValue { property: String, reason: String },

    /// Two column descriptions in one schema share a name
    #[error(
        "duplicate column name '{name}': the name properties of the column descriptions \
         must be unique within a given table description"
    )]
    DuplicateName { name: String },

    /// Identifier uses a reserved form
    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    /// Operation assumes absence but the target already exists
    #[error("{property} is already present")]
    AlreadyPresent { property: &'static str },

    /// A non-virtual column would follow a virtual one
    #[error("column '{name}' must not follow a virtual column")]
    VirtualColumnOrder { name: String },

    /// Required property is absent
    #[error("missing required property '{property}'")]
    MissingProperty { property: &'static str },

    /// Column reference names a column the schema does not describe
    #[error("{property} references unknown column '{name}'")]
    UnresolvedColumnReference { property: &'static str, name: String },
}

impl ValidationError {
    pub(crate) fn invalid_value(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPropertyValue {
            property: property.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
