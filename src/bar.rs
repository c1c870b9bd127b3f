use std::io::Write;

use crate::error::Error;
use crate::line::LineRenderer;

/// A determinate progress bar for work of known size.
///
/// Unlike the animated indicators there is no background thread: every call
/// to [`ActiveBar::update`] repaints synchronously on the caller's thread.
///
/// ```rust,ignore
/// let mut bar = ProgressBar::new("Copying", 150)?.width(30).start();
/// for done in 1..=150 {
///     copy_one()?;
///     bar.update(done)?;
/// }
/// // Copying [██████████████████████████████] 100%
/// ```
pub struct ProgressBar {
    message: String,
    total: u64,
    width: usize,
    filled: char,
    empty: char,
    percent: bool,
    target: Box<dyn Write + Send>,
}

impl ProgressBar {
    /// `total` is the denominator for progress and must be positive.
    pub fn new(message: impl Into<String>, total: u64) -> Result<Self, Error> {
        let message = message.into();
        if message.is_empty() {
            return Err(Error::Config("message must not be empty".into()));
        }
        if total == 0 {
            return Err(Error::Config("total must be greater than zero".into()));
        }
        Ok(Self {
            message,
            total,
            width: 40,
            filled: '█',
            empty: '░',
            percent: true,
            target: Box::new(std::io::stderr()),
        })
    }

    /// Track width in cells.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Custom fill characters.
    pub fn chars(mut self, filled: char, empty: char) -> Self {
        self.filled = filled;
        self.empty = empty;
        self
    }

    /// Label with the raw `current/total` count instead of a percentage.
    pub fn counts(mut self) -> Self {
        self.percent = false;
        self
    }

    /// Render to `target` instead of stderr.
    pub fn target(mut self, target: impl Write + Send + 'static) -> Self {
        self.target = Box::new(target);
        self
    }

    /// Render the zero state and return the live bar.
    pub fn start(self) -> ActiveBar {
        let mut bar = ActiveBar {
            message: self.message,
            total: self.total,
            width: self.width,
            filled: self.filled,
            empty: self.empty,
            percent: self.percent,
            current: 0,
            line: LineRenderer::new(self.target),
            closed: false,
        };
        bar.paint();
        bar
    }

    /// Run `f` with the live bar, cleaning up on every exit path.
    pub fn show<T>(self, f: impl FnOnce(&mut ActiveBar) -> T) -> T {
        let mut bar = self.start();
        let out = f(&mut bar);
        bar.close();
        out
    }
}

/// A started [`ProgressBar`].
///
/// On close (explicit or on drop): a bar that reached `total` repaints the
/// 100% state, then a newline moves subsequent output below the bar. A bar
/// abandoned early keeps its last rendered state; a propagating failure is
/// never altered by the teardown.
pub struct ActiveBar {
    message: String,
    total: u64,
    width: usize,
    filled: char,
    empty: char,
    percent: bool,
    current: u64,
    line: LineRenderer,
    closed: bool,
}

impl ActiveBar {
    /// Record that `current` items are complete and repaint.
    ///
    /// Values above `total` are rejected, not clamped, and leave the display
    /// untouched. Repeated calls with the same value repaint identically.
    pub fn update(&mut self, current: u64) -> Result<(), Error> {
        if current > self.total {
            return Err(Error::OutOfRange {
                value: current,
                total: self.total,
            });
        }
        self.current = current;
        self.paint();
        Ok(())
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Finish the bar. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if self.current == self.total {
            self.paint();
        }
        self.line.finalize();
    }

    fn paint(&mut self) {
        let text = self.compose();
        self.line.render(&text);
    }

    fn compose(&self) -> String {
        // Widen before multiplying so huge totals cannot overflow.
        let cells = (self.width as u128 * self.current as u128 / self.total as u128) as usize;
        let track: String = std::iter::repeat_n(self.filled, cells)
            .chain(std::iter::repeat_n(self.empty, self.width - cells))
            .collect();
        let label = if self.percent {
            format!("{:>3}%", 100 * self.current as u128 / self.total as u128)
        } else {
            format!("{}/{}", self.current, self.total)
        };
        format!("{} [{}] {}", self.message, track, label)
    }
}

impl Drop for ActiveBar {
    fn drop(&mut self) {
        self.close();
    }
}
