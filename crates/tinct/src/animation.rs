//! Frame tables for terminal animations.
//!
//! There is no clock here. The animating widget owns a tick counter
//! (usually a [`FrameCursor`]), advances it from its own timer, and asks for
//! the frame at that tick:
//!
//! ```rust
//! use tinct::{frame_at, FrameKind};
//!
//! assert_eq!(frame_at(FrameKind::Spinner, 0), "⠋");
//! assert_eq!(frame_at(FrameKind::Spinner, 10), "⠋");
//! ```

use unicode_width::UnicodeWidthStr;

pub const BLINK: &[&str] = &["●", " ", "●"];
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const DOT_SPINNER: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
pub const PULSE: &[&str] = &["◉", "◎", "○", "◎", "◉"];
pub const PROGRESS: &[&str] = &["▰▱▱▱▱", "▰▰▱▱▱", "▰▰▰▱▱", "▰▰▰▰▱", "▰▰▰▰▰"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// Status dot blinking on and off.
    Blink,
    /// Braille loading spinner.
    Spinner,
    DotSpinner,
    /// Dot fading out and back in.
    Pulse,
    /// Five-segment bar, filling left to right.
    Progress,
}

impl FrameKind {
    pub const ALL: [FrameKind; 5] = [
        FrameKind::Blink,
        FrameKind::Spinner,
        FrameKind::DotSpinner,
        FrameKind::Pulse,
        FrameKind::Progress,
    ];

    /// The frame table. Never empty.
    pub const fn frames(self) -> &'static [&'static str] {
        match self {
            FrameKind::Blink => BLINK,
            FrameKind::Spinner => SPINNER,
            FrameKind::DotSpinner => DOT_SPINNER,
            FrameKind::Pulse => PULSE,
            FrameKind::Progress => PROGRESS,
        }
    }

    pub const fn len(self) -> usize {
        self.frames().len()
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Display width of the widest frame, in terminal cells.
    pub fn width(self) -> usize {
        self.frames().iter().map(|f| f.width()).max().unwrap_or(0)
    }
}

/// The frame of `kind` shown at `tick`. Periodic in the table length.
pub fn frame_at(kind: FrameKind, tick: u64) -> &'static str {
    let frames = kind.frames();
    frames[(tick % frames.len() as u64) as usize]
}

/// The progress frame for a completion ratio in `[0, 1]`.
///
/// Out-of-range ratios are clamped; NaN shows the first level.
pub fn progress_frame(ratio: f32) -> &'static str {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let last = PROGRESS.len() - 1;
    PROGRESS[(ratio * last as f32).round() as usize]
}

/// A widget-owned animation position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCursor {
    pub kind: FrameKind,
    pub tick: u64,
}

impl FrameCursor {
    pub fn new(kind: FrameKind) -> Self {
        Self { kind, tick: 0 }
    }

    pub fn advance(&mut self) -> &'static str {
        self.tick = self.tick.wrapping_add(1);
        self.frame()
    }

    /// Restarts the sequence from its first frame.
    pub fn reset(&mut self) {
        self.tick = 0;
    }

    pub fn frame(&self) -> &'static str {
        frame_at(self.kind, self.tick)
    }
}
