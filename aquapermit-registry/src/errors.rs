//! Registry error types

use aquapermit_core::ValidationError;
use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors returned by registry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A validator rejected the write; nothing was committed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced entity does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of entity looked up
        entity: &'static str,
        /// Id that missed
        id: u64,
    },

    /// A submitted identifier collides with an existing one
    #[error("identifier {identifier} is already in use")]
    DuplicateIdentifier {
        /// The colliding identifier
        identifier: String,
    },
}
