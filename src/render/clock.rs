//! Animation clock.

/// Raw frames per animation frame at 60 Hz, about four art frames a second.
pub const ANIMATION_FRAME_DIVISOR: u32 = 15;

/// Counts rendered frames and derives the slower animation frame from them.
#[derive(Clone, Debug)]
pub struct FrameClock {
    raw: u64,
    divisor: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(ANIMATION_FRAME_DIVISOR)
    }
}

impl FrameClock {
    pub fn new(divisor: u32) -> Self {
        Self {
            raw: 0,
            divisor: divisor.max(1),
        }
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }

    /// Animation frame handed to the art layer.
    pub fn frame(&self) -> u32 {
        (self.raw / u64::from(self.divisor)) as u32
    }

    pub fn advance(&mut self) {
        self.raw += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_frame_every_fifteen_raw_frames() {
        let mut clock = FrameClock::default();
        for _ in 0..14 {
            clock.advance();
        }
        assert_eq!(clock.frame(), 0);
        clock.advance();
        assert_eq!(clock.frame(), 1);
        for _ in 0..30 {
            clock.advance();
        }
        assert_eq!(clock.frame(), 3);
        assert_eq!(clock.raw(), 45);
    }

    #[test]
    fn test_zero_divisor_is_bumped() {
        let mut clock = FrameClock::new(0);
        clock.advance();
        assert_eq!(clock.frame(), 1);
    }
}
