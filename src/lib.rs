#![doc = include_str!("../README.md")]

pub(crate) mod bar;
pub(crate) mod error;
pub(crate) mod frames;
pub(crate) mod indicator;
pub(crate) mod line;
pub(crate) mod ticker;


/// Re-exports of all public types and traits.
pub mod prelude {
    pub use crate::bar::{ActiveBar, ProgressBar};
    pub use crate::error::Error;
    pub use crate::frames::{Bounce, Dots, FrameSource, Spin};
    pub use crate::indicator::{Active, Bouncer, Ellipsis, Spinner};
}

pub use crate::prelude::*;
