use std::rc::Rc;

use yew::Reducible;

pub const MIN_ACTIVE: u32 = 120;
pub const MAX_ACTIVE: u32 = 320;
pub const INITIAL_ACTIVE: u32 = 186;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

impl Step {
    pub fn draw(random: &impl RandomSource) -> Self {
        if random.next_unit() > 0.5 {
            Step::Up
        } else {
            Step::Down
        }
    }
}

/// Decorative "crews running right now" count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveCrews(u32);

impl Default for ActiveCrews {
    fn default() -> Self {
        ActiveCrews(INITIAL_ACTIVE)
    }
}

impl ActiveCrews {
    pub fn count(self) -> u32 {
        self.0
    }

    pub fn stepped(self, step: Step) -> Self {
        let next = match step {
            Step::Up => self.0.saturating_add(1),
            Step::Down => self.0.saturating_sub(1),
        };
        ActiveCrews(next.clamp(MIN_ACTIVE, MAX_ACTIVE))
    }
}

impl Reducible for ActiveCrews {
    type Action = Step;

    fn reduce(self: Rc<Self>, step: Step) -> Rc<Self> {
        Rc::new(self.stepped(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Cycles through a fixed list of draws.
    struct Scripted {
        draws: Vec<f64>,
        at: Cell<usize>,
    }

    impl RandomSource for Scripted {
        fn next_unit(&self) -> f64 {
            let i = self.at.get();
            self.at.set(i + 1);
            self.draws[i % self.draws.len()]
        }
    }

    #[test]
    fn half_counts_as_down() {
        let random = Scripted { draws: vec![0.5, 0.51], at: Cell::new(0) };
        assert_eq!(Step::draw(&random), Step::Down);
        assert_eq!(Step::draw(&random), Step::Up);
    }

    #[test]
    fn stays_within_bounds_under_long_walks() {
        let random = Scripted {
            draws: vec![0.9, 0.9, 0.9, 0.1],
            at: Cell::new(0),
        };
        let mut crews = ActiveCrews::default();
        // 2001 draws end on an upward step
        for _ in 0..2_001 {
            crews = crews.stepped(Step::draw(&random));
            assert!((MIN_ACTIVE..=MAX_ACTIVE).contains(&crews.count()));
        }
        assert_eq!(crews.count(), MAX_ACTIVE);

        for _ in 0..2_000 {
            crews = crews.stepped(Step::Down);
        }
        assert_eq!(crews.count(), MIN_ACTIVE);
    }

    #[test]
    fn ceiling_absorbs_an_upward_step() {
        let mut crews = ActiveCrews::default();
        while crews.count() < MAX_ACTIVE {
            crews = crews.stepped(Step::Up);
        }
        assert_eq!(crews.stepped(Step::Up).count(), MAX_ACTIVE);
        assert_eq!(crews.stepped(Step::Down).count(), MAX_ACTIVE - 1);
    }

    #[test]
    fn reducer_applies_one_step() {
        let crews = Rc::new(ActiveCrews::default());
        let crews = crews.reduce(Step::Up);
        assert_eq!(crews.count(), INITIAL_ACTIVE + 1);
    }
}
