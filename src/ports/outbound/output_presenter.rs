use crate::shared::Result;

/// OutputPresenter port for writing one rendered artifact
///
/// This port abstracts the output destination (a file in the output
/// directory, stdout in tests) for a single formatted report document.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - Disk space is insufficient
    fn present(&self, content: &str) -> Result<()>;
}
