/// Slide position over a fixed slide count.
///
/// With zero slides every navigation reports `false` and the index stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    slide_count: usize,
    current_index: usize,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current_index: 0,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current_index
    }

    /// Moves forward, wrapping after the last slide. Returns `false` when empty.
    pub fn advance(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.slide_count;
        true
    }

    /// Moves backward, wrapping before the first slide. Returns `false` when empty.
    pub fn retreat(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
        true
    }

    /// Jumps to `index`. Out-of-range positions leave the state untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            return false;
        }
        self.current_index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::CarouselState;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn advance_wraps_after_last_slide() {
        let mut state = CarouselState::new(3);

        let visited: Vec<usize> = (0..3)
            .map(|_| {
                state.advance();
                state.current_index()
            })
            .collect();

        assert_eq!(visited, vec![1, 2, 0]);
    }

    #[test]
    fn retreat_wraps_before_first_slide() {
        let mut state = CarouselState::new(3);

        assert!(state.retreat());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn single_slide_wraps_to_itself() {
        let mut state = CarouselState::new(1);

        assert!(state.advance());
        assert_eq!(state.current_index(), 0);
        assert!(state.retreat());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn empty_state_never_moves() {
        let mut state = CarouselState::new(0);

        assert!(!state.advance());
        assert!(!state.retreat());
        assert!(!state.select(0));
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_active(0));
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut state = CarouselState::new(4);
        state.select(2);

        assert!(!state.select(4));
        assert!(!state.select(usize::MAX));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn random_walks_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for slide_count in 1..=8 {
            let mut state = CarouselState::new(slide_count);
            for _ in 0..500 {
                if rng.random_bool(0.5) {
                    state.advance();
                } else {
                    state.retreat();
                }
                assert!(state.current_index() < slide_count);
            }
        }
    }

    #[test]
    fn advance_and_retreat_are_inverse() {
        for slide_count in 1..=6 {
            for start in 0..slide_count {
                let mut state = CarouselState::new(slide_count);
                state.select(start);

                state.advance();
                state.retreat();
                assert_eq!(state.current_index(), start);

                state.retreat();
                state.advance();
                assert_eq!(state.current_index(), start);
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for slide_count in 1..=6 {
            for start in 0..slide_count {
                let mut state = CarouselState::new(slide_count);
                state.select(start);

                for _ in 0..slide_count {
                    state.advance();
                }

                assert_eq!(state.current_index(), start);
            }
        }
    }
}
