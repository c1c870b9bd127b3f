/// Errors reported to the caller.
///
/// Only construction-time validation and [`ActiveBar::update`] bounds checks
/// surface here. Terminal write failures are deliberately absent: rendering is
/// best-effort and an indicator must never replace the real failure of the
/// work it decorates.
///
/// [`ActiveBar::update`]: crate::ActiveBar::update
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid construction arguments, raised before any rendering begins.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// `update` called with a value outside `0..=total`. The rendered bar is
    /// left unchanged.
    #[error("progress value {value} out of range 0..={total}")]
    OutOfRange { value: u64, total: u64 },
}
