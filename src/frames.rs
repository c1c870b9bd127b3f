/// Produces the frame strings for one animation family.
///
/// A frame source is a pure function of `(index, configuration)`: no side
/// effects, no interior state. The ticker owns the index and advances it once
/// per tick; resetting to 0 reproduces the first frame.
pub trait FrameSource: Send + 'static {
    /// Length of the repeating cycle. `frame(i)` and `frame(i + cycle())`
    /// are identical for every `i`.
    fn cycle(&self) -> u64;

    /// The frame for a logical index. Indices beyond the cycle wrap.
    fn frame(&self, index: u64) -> String;
}

/// A marker oscillating across a fixed-width track: `[  ●     ]`.
///
/// The position follows a triangle wave with period `2 * (width - 1)`, so the
/// marker sweeps right then retraces left through the same cells.
pub struct Bounce {
    width: usize,
    marker: char,
}

impl Bounce {
    pub fn new(width: usize, marker: char) -> Self {
        debug_assert!(width >= 2);
        Self { width, marker }
    }
}

impl FrameSource for Bounce {
    fn cycle(&self) -> u64 {
        (2 * (self.width - 1)) as u64
    }

    fn frame(&self, index: u64) -> String {
        let phase = (index % self.cycle()) as usize;
        let pos = if phase < self.width {
            phase
        } else {
            2 * (self.width - 1) - phase
        };
        let mut track = String::with_capacity(self.width + 2);
        track.push('[');
        for cell in 0..self.width {
            track.push(if cell == pos { self.marker } else { ' ' });
        }
        track.push(']');
        track
    }
}

/// A rotating glyph cycling through a fixed ordered set.
pub struct Spin {
    glyphs: &'static [&'static str],
}

impl Spin {
    /// Braille dot spinner (the most common choice).
    pub fn dots() -> Self {
        Self {
            glyphs: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        }
    }

    /// Classic line spinner.
    pub fn line() -> Self {
        Self {
            glyphs: &["-", "\\", "|", "/"],
        }
    }

    /// Arrow spinner.
    pub fn arrow() -> Self {
        Self {
            glyphs: &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"],
        }
    }

    /// Custom frames.
    pub fn custom(glyphs: &'static [&'static str]) -> Self {
        debug_assert!(!glyphs.is_empty());
        Self { glyphs }
    }
}

impl FrameSource for Spin {
    fn cycle(&self) -> u64 {
        self.glyphs.len() as u64
    }

    fn frame(&self, index: u64) -> String {
        self.glyphs[(index % self.cycle()) as usize].to_string()
    }
}

/// A growing ellipsis, `0..=max` dots then restart.
///
/// Frames are padded with spaces to a constant width of `max`, so shrinking
/// back to zero dots blanks the trail instead of leaving stale characters.
pub struct Dots {
    max: usize,
}

impl Dots {
    pub fn new(max: usize) -> Self {
        debug_assert!(max >= 1);
        Self { max }
    }
}

impl FrameSource for Dots {
    fn cycle(&self) -> u64 {
        (self.max + 1) as u64
    }

    fn frame(&self, index: u64) -> String {
        let n = (index % self.cycle()) as usize;
        let mut dots = String::with_capacity(self.max);
        for cell in 0..self.max {
            dots.push(if cell < n { '.' } else { ' ' });
        }
        dots
    }
}
