//! Bounded rolling window of outcomes, the statistical substrate for the
//! accuracy estimator and the ensemble predictor.

use crate::constants::WINDOW_CAPACITY;
use crate::types::Outcome;

/// Ordered FIFO sequence of outcomes with a fixed capacity. The only
/// removal is capacity-driven eviction of the oldest element.
#[derive(Debug, Clone, Default)]
pub struct PatternWindow {
    outcomes: Vec<Outcome>,
}

impl PatternWindow {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::with_capacity(WINDOW_CAPACITY),
        }
    }

    /// Append an outcome, evicting the oldest when the window is full.
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
        if self.outcomes.len() > WINDOW_CAPACITY {
            self.outcomes.remove(0);
        }
    }

    /// Ordered view, oldest first. Statistical routines take this as an
    /// immutable snapshot for the whole prediction cycle.
    pub fn as_slice(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Compact symbol rendering, e.g. `"ttxtx"`.
    pub fn pattern_string(&self) -> String {
        self.outcomes.iter().map(|o| o.symbol()).collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eviction_keeps_the_most_recent_50_in_order() {
        let mut window = PatternWindow::new();
        for i in 0..51u32 {
            // Alternate classes so order is observable.
            let outcome = if i % 2 == 0 {
                Outcome::High
            } else {
                Outcome::Low
            };
            window.push(outcome);
        }
        assert_eq!(window.len(), WINDOW_CAPACITY);
        // First pushed element (index 0, High) was evicted; the window now
        // starts at the element pushed second (Low).
        assert_eq!(window.as_slice()[0], Outcome::Low);
        assert_eq!(window.as_slice()[WINDOW_CAPACITY - 1], Outcome::High);
    }

    #[test]
    fn pattern_string_uses_symbols() {
        let mut window = PatternWindow::new();
        window.push(Outcome::High);
        window.push(Outcome::Low);
        window.push(Outcome::High);
        assert_eq!(window.pattern_string(), "txt");
    }
}
