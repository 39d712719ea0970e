//! Pacing of character-by-character text reveals.

use std::thread;
use std::time::Duration;

/// Called once after every revealed character.
pub trait RevealPacer {
    fn pause(&mut self, delay: Duration);
}

/// Blocks the calling thread for the full delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl RevealPacer for SleepPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Reveals everything at once; counts the pauses it skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer {
    pub skipped: usize,
}

impl RevealPacer for InstantPacer {
    fn pause(&mut self, _delay: Duration) {
        self.skipped += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn instant_pacer_never_blocks() {
        let mut p = InstantPacer::default();
        let start = Instant::now();
        for _ in 0..100 {
            p.pause(Duration::from_secs(1));
        }
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(p.skipped, 100);
    }

    #[test]
    fn sleep_pacer_waits_at_least_the_delay() {
        let mut p = SleepPacer;
        let start = Instant::now();
        p.pause(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
