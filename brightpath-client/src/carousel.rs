/// Index state for a rotating single-item display.
///
/// Pure arithmetic; the timer lives in [`crate::rotation::Rotator`] and
/// the items themselves in whoever owns the fetched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    hovered: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            hovered: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Automatic rotation runs only with more than one item and no hover.
    pub fn can_rotate(&self) -> bool {
        self.len > 1 && !self.hovered
    }

    /// Timer tick: step forward when rotation is eligible, else no-op.
    pub fn advance(&mut self) {
        if self.can_rotate() {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Manual "next" control, wrapping around.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Manual "previous" control. Adds `len - 1` before the modulo so the
    /// arithmetic never goes negative.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Adopt a new list length, re-clamping the index when the list
    /// shrank past it.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.index = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_n_times_returns_to_start() {
        let n = 5;
        let mut carousel = Carousel::new(n);
        for _ in 0..n {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.previous();
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn shrinking_list_reclamps_index() {
        let mut carousel = Carousel::new(5);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 4);

        carousel.set_len(2);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn emptied_list_resets_index() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.set_len(0);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn advance_pauses_while_hovered() {
        let mut carousel = Carousel::new(3);
        carousel.set_hovered(true);
        carousel.advance();
        assert_eq!(carousel.index(), 0);

        carousel.set_hovered(false);
        carousel.advance();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn advance_is_a_noop_for_short_lists() {
        for len in [0, 1] {
            let mut carousel = Carousel::new(len);
            carousel.advance();
            assert_eq!(carousel.index(), 0);
        }
    }

    #[test]
    fn manual_controls_ignore_empty_lists() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }
}
