//! Per-card display state: image carousel position and wishlist flag

/// Index before `current`, wrapping from 0 to `len - 1`
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

/// Index after `current`, wrapping from `len - 1` to 0
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardDisplay {
    image_index: usize,
    pub wishlisted: bool,
}

impl CardDisplay {
    /// Current index, always within `[0, len - 1]` for a non-empty sequence
    pub fn image_index(&self, len: usize) -> usize {
        if self.image_index < len {
            self.image_index
        } else {
            0
        }
    }

    pub fn prev_image(&mut self, len: usize) {
        self.image_index = prev_index(self.image_index(len), len);
    }

    pub fn next_image(&mut self, len: usize) {
        self.image_index = next_index(self.image_index(len), len);
    }

    pub fn toggle_wishlist(&mut self) {
        self.wishlisted = !self.wishlisted;
    }
}

/// "position / count" indicator data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselPosition {
    pub index: usize,
    pub count: usize,
}

impl std::fmt::Display for CarouselPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.index + 1, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_wraps_to_last() {
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(prev_index(2, 4), 1);
    }

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(next_index(1, 4), 2);
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut display = CardDisplay::default();
        display.next_image(1);
        assert_eq!(display.image_index(1), 0);
        display.prev_image(1);
        assert_eq!(display.image_index(1), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut display = CardDisplay::default();
        for _ in 0..3 {
            display.next_image(3);
        }
        assert_eq!(display.image_index(3), 0);
        display.prev_image(3);
        assert_eq!(display.image_index(3), 2);
    }

    #[test]
    fn test_position_indicator_is_one_based() {
        let pos = CarouselPosition { index: 0, count: 3 };
        assert_eq!(pos.to_string(), "1 / 3");
    }
}
