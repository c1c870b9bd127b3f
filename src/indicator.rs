use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Error;
use crate::frames::{Bounce, Dots, FrameSource, Spin};
use crate::line::LineRenderer;
use crate::ticker::Ticker;

/// Shared configuration for the three animated indicators.
struct Animation {
    message: String,
    erase: bool,
    interval: Duration,
    target: Box<dyn Write + Send>,
}

impl Animation {
    fn new(message: impl Into<String>, interval: Duration) -> Result<Self, Error> {
        let message = message.into();
        if message.is_empty() {
            return Err(Error::Config("message must not be empty".into()));
        }
        Ok(Self {
            message,
            erase: false,
            interval,
            target: Box::new(std::io::stderr()),
        })
    }

    fn start(self, source: impl FrameSource) -> Active {
        let line = Arc::new(Mutex::new(LineRenderer::new(self.target)));
        let painter = line.clone();
        let message = self.message;
        let ticker = Ticker::spawn(self.interval, move |index| {
            let text = format!("{} {}", message, source.frame(index));
            painter.lock().unwrap().render(&text);
        });
        Active {
            ticker: Some(ticker),
            line,
            erase: self.erase,
        }
    }
}

/// A running animated indicator.
///
/// Holds the background ticker for the duration of the wrapped work. Closing
/// (explicitly or on drop) stops and joins the ticker first, so the exit-policy
/// write is guaranteed to be the last thing on the stream. The guard never
/// touches a propagating panic or error; cleanup runs and the failure
/// continues outward unchanged.
pub struct Active {
    ticker: Option<Ticker>,
    line: Arc<Mutex<LineRenderer>>,
    erase: bool,
}

impl Active {
    /// Stop the animation and apply the erase policy. Idempotent.
    pub fn close(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };
        ticker.stop();
        if let Ok(mut line) = self.line.lock() {
            if self.erase {
                line.erase();
            } else {
                line.finalize();
            }
        }
    }
}

impl Drop for Active {
    fn drop(&mut self) {
        self.close();
    }
}

/// A rotating glyph next to a message, for work of unknown duration.
///
/// ```rust,ignore
/// Spinner::new("Resolving dependencies")?.erase(true).show(|| {
///     // long-running work
/// });
/// ```
pub struct Spinner {
    anim: Animation,
    glyphs: Spin,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            anim: Animation::new(message, Duration::from_millis(100))?,
            glyphs: Spin::dots(),
        })
    }

    /// Clear the line on exit instead of leaving the last frame visible.
    pub fn erase(mut self, yes: bool) -> Self {
        self.anim.erase = yes;
        self
    }

    /// Override the repaint interval.
    pub fn interval(mut self, d: Duration) -> Self {
        self.anim.interval = d;
        self
    }

    /// Render to `target` instead of stderr.
    pub fn target(mut self, target: impl Write + Send + 'static) -> Self {
        self.anim.target = Box::new(target);
        self
    }

    /// Use a different glyph set, e.g. [`Spin::line`] or [`Spin::custom`].
    pub fn glyphs(mut self, glyphs: Spin) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Start animating. Returns the guard; the animation stops when it drops.
    pub fn start(self) -> Active {
        self.anim.start(self.glyphs)
    }

    /// Run `f` under the indicator, cleaning up on every exit path.
    pub fn show<T>(self, f: impl FnOnce() -> T) -> T {
        let mut active = self.start();
        let out = f();
        active.close();
        out
    }
}

/// A marker bouncing across a fixed-width track, for work of unknown duration.
pub struct Bouncer {
    anim: Animation,
    width: usize,
    marker: char,
}

impl Bouncer {
    pub fn new(message: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            anim: Animation::new(message, Duration::from_millis(100))?,
            width: 8,
            marker: '●',
        })
    }

    /// Track width in cells. At least 2.
    pub fn width(mut self, width: usize) -> Result<Self, Error> {
        if width < 2 {
            return Err(Error::Config("bounce track width must be at least 2".into()));
        }
        self.width = width;
        Ok(self)
    }

    /// The character that bounces.
    pub fn marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Clear the line on exit instead of leaving the last frame visible.
    pub fn erase(mut self, yes: bool) -> Self {
        self.anim.erase = yes;
        self
    }

    /// Override the repaint interval.
    pub fn interval(mut self, d: Duration) -> Self {
        self.anim.interval = d;
        self
    }

    /// Render to `target` instead of stderr.
    pub fn target(mut self, target: impl Write + Send + 'static) -> Self {
        self.anim.target = Box::new(target);
        self
    }

    /// Start animating. Returns the guard; the animation stops when it drops.
    pub fn start(self) -> Active {
        let source = Bounce::new(self.width, self.marker);
        self.anim.start(source)
    }

    /// Run `f` under the indicator, cleaning up on every exit path.
    pub fn show<T>(self, f: impl FnOnce() -> T) -> T {
        let mut active = self.start();
        let out = f();
        active.close();
        out
    }
}

/// The classic growing `...` animation, for work of unknown duration.
pub struct Ellipsis {
    anim: Animation,
    max: usize,
}

impl Ellipsis {
    pub fn new(message: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            anim: Animation::new(message, Duration::from_millis(500))?,
            max: 3,
        })
    }

    /// Maximum number of dots before the cycle restarts. At least 1.
    pub fn dots(mut self, max: usize) -> Result<Self, Error> {
        if max == 0 {
            return Err(Error::Config("ellipsis needs at least one dot".into()));
        }
        self.max = max;
        Ok(self)
    }

    /// Clear the line on exit instead of leaving the last frame visible.
    pub fn erase(mut self, yes: bool) -> Self {
        self.anim.erase = yes;
        self
    }

    /// Override the repaint interval.
    pub fn interval(mut self, d: Duration) -> Self {
        self.anim.interval = d;
        self
    }

    /// Render to `target` instead of stderr.
    pub fn target(mut self, target: impl Write + Send + 'static) -> Self {
        self.anim.target = Box::new(target);
        self
    }

    /// Start animating. Returns the guard; the animation stops when it drops.
    pub fn start(self) -> Active {
        let source = Dots::new(self.max);
        self.anim.start(source)
    }

    /// Run `f` under the indicator, cleaning up on every exit path.
    pub fn show<T>(self, f: impl FnOnce() -> T) -> T {
        let mut active = self.start();
        let out = f();
        active.close();
        out
    }
}
