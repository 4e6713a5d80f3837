//! Index and width bookkeeping for the problem-card carousel.
//!
//! The strip renders the card list twice so there is always trailing content
//! to slide into; the logical index only ever addresses the first copy.

use std::rc::Rc;
use yew::prelude::*;

/// Viewport width (px) at which the carousel switches to the fixed desktop card.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const DESKTOP_CARD_WIDTH: f64 = 562.0;
pub const MOBILE_CARD_RATIO: f64 = 0.85;
/// Horizontal spacing between cards in the strip.
pub const CARD_GAP: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

pub fn card_width_for(viewport_width: f64) -> f64 {
    if viewport_width < MOBILE_BREAKPOINT {
        viewport_width * MOBILE_CARD_RATIO
    } else {
        DESKTOP_CARD_WIDTH
    }
}

/// The cards followed by the same cards once more.
pub fn display_sequence<T>(cards: &[T]) -> Vec<&T> {
    cards.iter().chain(cards.iter()).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    current_index: usize,
    total_cards: usize,
    card_width: f64,
}

impl CarouselState {
    pub fn new(total_cards: usize, viewport_width: Option<f64>) -> Self {
        Self {
            current_index: 0,
            total_cards,
            card_width: viewport_width.map_or(DESKTOP_CARD_WIDTH, card_width_for),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn card_width(&self) -> f64 {
        self.card_width
    }

    pub fn advance(&mut self, direction: Direction) {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    pub fn next(&mut self) {
        if self.total_cards == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % self.total_cards;
    }

    pub fn previous(&mut self) {
        if self.total_cards == 0 {
            return;
        }
        self.current_index = (self.current_index + self.total_cards - 1) % self.total_cards;
    }

    pub fn resize(&mut self, viewport_width: f64) {
        self.card_width = card_width_for(viewport_width);
    }

    /// Horizontal translation of the strip in px (always <= 0).
    pub fn offset(&self) -> f64 {
        -(self.current_index as f64 * (self.card_width + CARD_GAP))
    }

    /// Full width of a strip holding `len` cards.
    pub fn strip_width(&self, len: usize) -> f64 {
        len as f64 * (self.card_width + CARD_GAP)
    }
}

pub enum CarouselAction {
    Advance(Direction),
    Resize(f64),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Advance(direction) => {
                next.advance(direction);
                log::debug!("Carousel moved {:?} to card {}", direction, next.current_index);
            }
            CarouselAction::Resize(viewport_width) => {
                next.resize(viewport_width);
                if next.card_width == self.card_width {
                    return self;
                }
                log::debug!("Carousel card width now {}px", next.card_width);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize, total: usize) -> CarouselState {
        let mut state = CarouselState::new(total, None);
        for _ in 0..index {
            state.next();
        }
        state
    }

    #[test]
    fn starts_at_first_card_with_desktop_width() {
        let state = CarouselState::new(4, None);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.card_width(), DESKTOP_CARD_WIDTH);
    }

    #[test]
    fn next_wraps_modulo_total() {
        for start in 0..4 {
            for steps in 0..12 {
                let mut state = at(start, 4);
                for _ in 0..steps {
                    state.advance(Direction::Next);
                }
                assert_eq!(state.current_index(), (start + steps) % 4);
            }
        }
    }

    #[test]
    fn previous_wraps_modulo_total() {
        for start in 0..4 {
            for steps in 0..12 {
                let mut state = at(start, 4);
                for _ in 0..steps {
                    state.advance(Direction::Previous);
                }
                assert_eq!(state.current_index(), (start + 4 * 3 - steps) % 4);
            }
        }
    }

    #[test]
    fn previous_from_first_card_goes_to_last() {
        let mut state = CarouselState::new(4, None);
        state.previous();
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn next_then_previous_is_identity() {
        for start in 0..4 {
            let mut state = at(start, 4);
            state.next();
            state.previous();
            assert_eq!(state.current_index(), start);

            state.previous();
            state.next();
            assert_eq!(state.current_index(), start);
        }
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        let mut state = CarouselState::new(0, None);
        state.next();
        state.previous();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn resize_below_breakpoint_scales_with_viewport() {
        let mut state = CarouselState::new(4, Some(1440.0));
        state.resize(400.0);
        assert!((state.card_width() - 340.0).abs() < 1e-9);
    }

    #[test]
    fn resize_at_or_above_breakpoint_uses_desktop_width() {
        let mut state = CarouselState::new(4, Some(320.0));
        state.resize(MOBILE_BREAKPOINT);
        assert_eq!(state.card_width(), DESKTOP_CARD_WIDTH);
        state.resize(600.0);
        state.resize(2560.0);
        assert_eq!(state.card_width(), DESKTOP_CARD_WIDTH);
    }

    #[test]
    fn resize_keeps_index() {
        let mut state = at(2, 4);
        state.resize(500.0);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn offset_steps_by_card_plus_gap() {
        let state = at(3, 4);
        assert_eq!(state.offset(), -3.0 * (DESKTOP_CARD_WIDTH + CARD_GAP));
        assert_eq!(state.strip_width(8), 8.0 * (DESKTOP_CARD_WIDTH + CARD_GAP));
    }

    #[test]
    fn display_sequence_repeats_cards_once() {
        let cards = ["a", "b", "c"];
        let seq: Vec<&str> = display_sequence(&cards).into_iter().copied().collect();
        assert_eq!(seq, vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn reducer_returns_same_state_when_width_unchanged() {
        let state = Rc::new(CarouselState::new(4, Some(1200.0)));
        let reduced = state.clone().reduce(CarouselAction::Resize(1600.0));
        assert!(Rc::ptr_eq(&state, &reduced));
    }

    #[test]
    fn reducer_advances() {
        let state = Rc::new(CarouselState::new(4, None));
        let reduced = state.reduce(CarouselAction::Advance(Direction::Previous));
        assert_eq!(reduced.current_index(), 3);
    }
}
