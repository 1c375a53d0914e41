//! Trailing-run detection over the pattern window.

use std::fmt;

use crate::types::Outcome;

/// Length of the trailing run of identical outcomes, e.g. `Tài (3)` after
/// three consecutive High rounds. An empty window has no class and count 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    pub outcome: Option<Outcome>,
    pub count: usize,
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.outcome.map(|o| o.label()).unwrap_or("-");
        write!(f, "{} ({})", label, self.count)
    }
}

/// Count backward from the last outcome while consecutive elements match.
pub fn current_streak(window: &[Outcome]) -> Streak {
    match window.last() {
        None => Streak {
            outcome: None,
            count: 0,
        },
        Some(&last) => Streak {
            outcome: Some(last),
            count: window.iter().rev().take_while(|&&o| o == last).count(),
        },
    }
}
