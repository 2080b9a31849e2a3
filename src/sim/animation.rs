//! Per-entity sprite frame cycling
//!
//! Each animated entity carries its own timer: the avatar has one, every
//! hazard has one. Frames advance modulo the sheet length every
//! `FRAME_INTERVAL_MS`, cyclic with no terminal state.

use crate::consts::FRAME_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTimer {
    frame: usize,
    last_change: u64,
}

impl FrameTimer {
    pub fn new(now: u64) -> Self {
        Self {
            frame: 0,
            last_change: now,
        }
    }

    /// Advance the frame index if the interval has elapsed. `frame_count`
    /// must be non-zero; a zero-length sprite sheet is a construction bug.
    pub fn advance(&mut self, now: u64, frame_count: usize) -> usize {
        assert!(frame_count > 0, "empty frame set");
        if now.saturating_sub(self.last_change) >= FRAME_INTERVAL_MS {
            self.frame = (self.frame + 1) % frame_count;
            self.last_change = now;
        }
        self.frame
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Shift the reference timestamp forward, e.g. after a pause, so the
    /// paused interval is not counted toward the next frame flip.
    pub fn shift(&mut self, delta_ms: u64) {
        self.last_change += delta_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_frame_below_interval() {
        let mut timer = FrameTimer::new(0);
        assert_eq!(timer.advance(99, 5), 0);
        assert_eq!(timer.advance(100, 5), 1);
    }

    #[test]
    fn wraps_to_zero() {
        let mut timer = FrameTimer::new(0);
        let mut now = 0;
        for expected in [1, 2, 3, 4, 0, 1] {
            now += FRAME_INTERVAL_MS;
            assert_eq!(timer.advance(now, 5), expected);
        }
    }

    #[test]
    fn independent_timers_do_not_interfere() {
        let mut a = FrameTimer::new(0);
        let mut b = FrameTimer::new(50);
        a.advance(100, 10);
        assert_eq!(a.frame(), 1);
        assert_eq!(b.advance(100, 10), 0);
        assert_eq!(b.advance(150, 10), 1);
    }

    #[test]
    fn shift_absorbs_paused_time() {
        let mut timer = FrameTimer::new(0);
        timer.advance(100, 5);
        // 5 seconds pass while paused
        timer.shift(5000);
        assert_eq!(timer.advance(5150, 5), 1);
        assert_eq!(timer.advance(5200, 5), 2);
    }

    #[test]
    #[should_panic(expected = "empty frame set")]
    fn rejects_empty_frame_set() {
        FrameTimer::new(0).advance(100, 0);
    }
}
