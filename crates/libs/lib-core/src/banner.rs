//! # Banner Rotation
//!
//! Index into a fixed image list that advances one step per timer tick and wraps.
//! The timer itself lives in the browser crate; this type only decides what a tick
//! does, and refuses to move once stopped so a late tick after teardown is a no-op.

/// Milliseconds between banner advances.
pub const ROTATE_INTERVAL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerRotation {
    len: usize,
    current: usize,
    running: bool,
}

impl BannerRotation {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            running: true,
        }
    }

    /// Index of the image on screen.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance to the next image.
    ///
    /// Returns `false` without moving when the rotation is stopped or has nothing to
    /// show; the caller's timer loop should end at that point.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.len == 0 {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}
