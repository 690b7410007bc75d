//! Error types for grid configuration, layout addressing and statistics lookups

use thiserror::Error;

/// Failure reported by an external collaborator (artwork, user or stats store)
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for all cover art operations
#[derive(Debug, Error)]
pub enum CoverArtError {
    /// Grid configuration failed validation
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Layout index has no design registered for the grid dimension
    #[error("No layout {layout} is registered for dimension {dimension}")]
    UnknownLayout {
        /// Grid dimension the layout was requested for
        dimension: u32,
        /// Requested layout index
        layout: usize,
    },

    /// Tile address is malformed or references a tile outside the grid
    #[error("Invalid address {address} specified.")]
    InvalidAddress {
        /// The address as it was supplied
        address: String,
    },

    /// Caller supplied an unsupported entity or time range
    #[error("Invalid {field} '{value}': {reason}")]
    Validation {
        /// Name of the rejected field
        field: &'static str,
        /// Rejected value
        value: String,
        /// Explanation of what is accepted
        reason: String,
    },

    /// No user exists with the given name
    #[error("User {user_name} not found")]
    UserNotFound {
        /// Name that was looked up
        user_name: String,
    },

    /// Statistics have not been calculated for this user, entity and range
    #[error("Stats for user {user_name} not found/calculated ({entity}, {range})")]
    StatsNotFound {
        /// Name of the user
        user_name: String,
        /// Requested statistics entity
        entity: &'static str,
        /// Requested time range
        range: &'static str,
    },

    /// An external store failed; propagated without retry
    #[error("Store error during {operation}: {source}")]
    Store {
        /// Store operation that failed
        operation: &'static str,
        /// Underlying store error
        #[source]
        source: StoreError,
    },
}

/// Broad classification of a [`CoverArtError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid generator configuration or layout selection
    Configuration,
    /// Malformed or out-of-range tile address
    InvalidAddress,
    /// Unsupported caller input
    Validation,
    /// Unknown user or missing statistics
    NotFound,
    /// Collaborator failure
    Store,
}

impl CoverArtError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } | Self::UnknownLayout { .. } => ErrorKind::Configuration,
            Self::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::UserNotFound { .. } | Self::StatsNotFound { .. } => ErrorKind::NotFound,
            Self::Store { .. } => ErrorKind::Store,
        }
    }
}

/// Convenience type alias for cover art results
pub type Result<T> = std::result::Result<T, CoverArtError>;

/// Attach the failing operation to a store result
pub trait StoreContext<T> {
    /// Convert a store failure into [`CoverArtError::Store`]
    ///
    /// # Errors
    ///
    /// Propagates the store error tagged with `operation`
    fn store_context(self, operation: &'static str) -> Result<T>;
}

impl<T> StoreContext<T> for std::result::Result<T, StoreError> {
    fn store_context(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| CoverArtError::Store { operation, source })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CoverArtError {
    CoverArtError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a validation error for rejected caller input
pub fn validation_error(
    field: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CoverArtError {
    CoverArtError::Validation {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid address error
pub fn invalid_address(address: &impl ToString) -> CoverArtError {
    CoverArtError::InvalidAddress {
        address: address.to_string(),
    }
}
