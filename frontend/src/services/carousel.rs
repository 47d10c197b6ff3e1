use std::rc::Rc;

use yew::Reducible;

pub enum CarouselAction {
    Advance,
    Select(usize),
}

/// Position in a fixed, ordered list of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn advanced(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    /// Jumps to `index`; out-of-range selections leave the carousel where it is.
    pub fn selected(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// Horizontal offset of the slide track, in percent of one slide.
    pub fn offset_percent(self) -> usize {
        self.index * 100
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let next = match action {
            CarouselAction::Advance => self.advanced(),
            CarouselAction::Select(index) => self.selected(index),
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(3).selected(1);
        for _ in 0..3 {
            carousel = carousel.advanced();
            assert!(carousel.index() < 3);
        }
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn wraps_after_last() {
        let carousel = Carousel::new(3).selected(2).advanced();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let carousel = Carousel::new(3).selected(1).selected(7);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn empty_list_never_moves() {
        let carousel = Carousel::new(0).advanced().selected(0);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn manual_selection_then_timer_continues_from_there() {
        let carousel = Rc::new(Carousel::new(3));
        let carousel = carousel.reduce(CarouselAction::Select(2));
        let carousel = carousel.reduce(CarouselAction::Advance);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.offset_percent(), 0);
    }
}
