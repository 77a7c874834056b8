use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where the formatted
/// export is written.
pub trait OutputPresenter {
    /// Presents the formatted content, replacing anything previously
    /// written to the same destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - The destination is rejected by the file-safety checks
    fn present(&self, content: &str) -> Result<()>;

    /// Human-readable name of the destination, used in completion messages
    fn destination(&self) -> String;
}
