//! Command pattern interface
//!
//! Each CLI operation is a Command so argument handling stays separate from
//! the extraction logic.

use crate::errors::AvatarResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> AvatarResult<()>;
}
