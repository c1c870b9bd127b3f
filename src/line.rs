use std::io::Write;

/// Repaints a single terminal line in place.
///
/// Each render emits a carriage return, the new text padded with spaces out to
/// the previous render's width (blanking leftovers from a longer frame), then
/// a second carriage return so the cursor sits at column 0 ready for the next
/// overwrite. No newline is written until [`finalize`](LineRenderer::finalize).
///
/// Writes are best-effort: the first failed write or flush flips the renderer
/// into a dead state where every later call is a no-op. A progress line that
/// lost its terminal must never crash the work it decorates.
pub(crate) struct LineRenderer {
    target: Box<dyn Write + Send>,
    last_width: usize,
    dead: bool,
}

impl LineRenderer {
    pub fn new(target: Box<dyn Write + Send>) -> Self {
        Self {
            target,
            last_width: 0,
            dead: false,
        }
    }

    /// Overwrite the line with `text`.
    pub fn render(&mut self, text: &str) {
        if self.dead {
            return;
        }
        let width = text.chars().count();
        let pad = self.last_width.saturating_sub(width);
        let outcome = write!(self.target, "\r{}{}\r", text, " ".repeat(pad))
            .and_then(|_| self.target.flush());
        self.apply(outcome);
        self.last_width = width;
    }

    /// Blank the line entirely, leaving the cursor at column 0.
    pub fn erase(&mut self) {
        if self.dead {
            return;
        }
        let outcome = write!(self.target, "\r{}\r", " ".repeat(self.last_width))
            .and_then(|_| self.target.flush());
        self.apply(outcome);
        self.last_width = 0;
    }

    /// Leave the current line visible and move to a fresh one.
    pub fn finalize(&mut self) {
        if self.dead {
            return;
        }
        let outcome = writeln!(self.target).and_then(|_| self.target.flush());
        self.apply(outcome);
        self.last_width = 0;
    }

    fn apply(&mut self, outcome: std::io::Result<()>) {
        if outcome.is_err() {
            self.dead = true;
        }
    }
}

impl std::fmt::Debug for LineRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineRenderer")
            .field("last_width", &self.last_width)
            .field("dead", &self.dead)
            .finish()
    }
}
