use super::super::storage::StorageError;
use super::super::traits::TabError;
use shared::tab::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Tab not found: {0}")]
    TabNotFound(u32),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Map a storage error to a response code (clients own the localization)
fn classify_storage_error(e: &StorageError) -> CommandErrorCode {
    // Exact variants first
    if let StorageError::Serialization(_) = e {
        return CommandErrorCode::InternalError;
    }

    // redb errors are classified by string matching
    let err_str = e.to_string().to_lowercase();

    // Disk exhausted
    if err_str.contains("no space") || err_str.contains("disk full") || err_str.contains("enospc")
    {
        return CommandErrorCode::StorageFull;
    }

    // Memory exhausted
    if err_str.contains("out of memory") || err_str.contains("cannot allocate") {
        return CommandErrorCode::OutOfMemory;
    }

    // Data damage
    if err_str.contains("corrupt") || err_str.contains("invalid database") {
        return CommandErrorCode::StorageCorrupted;
    }

    // Default: busy (redb Database/Transaction/Table/Storage/Commit errors)
    CommandErrorCode::SystemBusy
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        let (code, message) = match err {
            ManagerError::Storage(e) => {
                let code = classify_storage_error(&e);
                let message = e.to_string(); // keep technical detail for logs
                tracing::error!(error = %e, error_code = ?code, "Storage error occurred");
                (code, message)
            }
            ManagerError::TabNotFound(id) => (
                CommandErrorCode::TabNotFound,
                format!("Tab not found: {}", id),
            ),
            ManagerError::Validation(msg) => (CommandErrorCode::ValidationFailed, msg),
            ManagerError::InvalidOperation(msg) => (CommandErrorCode::InvalidOperation, msg),
            ManagerError::Internal(msg) => (CommandErrorCode::InternalError, msg),
        };
        CommandError::new(code, message)
    }
}

impl From<TabError> for ManagerError {
    fn from(err: TabError) -> Self {
        match err {
            TabError::TabNotFound(id) => ManagerError::TabNotFound(id),
            TabError::Validation(msg) => ManagerError::Validation(msg),
            TabError::InvalidOperation(msg) => ManagerError::InvalidOperation(msg),
            TabError::Storage(e) => ManagerError::Storage(e),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
