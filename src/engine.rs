//! Round ingestion pipeline and the shared service state.
//!
//! One logical writer (the poller) calls [`ForecastEngine::ingest`] per
//! cycle; the HTTP handlers read concurrently. A single `RwLock` around the
//! whole state gives readers either the pre-update or the fully updated
//! snapshot, never a partially built record.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::constants::{HISTORY_CAPACITY, SOURCE_ID};
use crate::dice_mechanics::{dice_total, outcome_of_total};
use crate::pattern_window::PatternWindow;
use crate::prediction::predict;
use crate::storage::HistoryStore;
use crate::streak::current_streak;
use crate::types::RoundRecord;

#[derive(Default)]
struct EngineState {
    window: PatternWindow,
    history: Vec<RoundRecord>,
    latest: Option<RoundRecord>,
}

/// Owns the pattern window, the bounded history and the latest snapshot;
/// write-through persistence goes to the injected [`HistoryStore`].
pub struct ForecastEngine {
    state: RwLock<EngineState>,
    store: Arc<dyn HistoryStore>,
}

impl ForecastEngine {
    /// Engine seeded from whatever the store holds. The pattern window is
    /// rebuilt from the restored outcomes (most recent 50 survive the
    /// window capacity) and the last record becomes the latest snapshot.
    pub fn with_store(store: Arc<dyn HistoryStore>) -> Self {
        let mut state = EngineState::default();
        match store.load() {
            Ok(mut records) => {
                if records.len() > HISTORY_CAPACITY {
                    records.drain(..records.len() - HISTORY_CAPACITY);
                }
                for record in &records {
                    state.window.push(record.outcome);
                }
                state.latest = records.last().cloned();
                if !records.is_empty() {
                    info!(rounds = records.len(), "restored round history");
                }
                state.history = records;
            }
            Err(err) => warn!(%err, "could not restore history, starting empty"),
        }
        Self {
            state: RwLock::new(state),
            store,
        }
    }

    /// Process one resolved round. Returns false when `session` matches the
    /// latest snapshot (duplicate delivery); duplicates cause no state
    /// change at all.
    pub fn ingest(&self, session: u64, d1: u32, d2: u32, d3: u32) -> bool {
        let total = dice_total(d1, d2, d3);
        let outcome = outcome_of_total(total);

        let (record, history) = {
            let mut state = self.state.write();
            if state.latest.as_ref().map(|r| r.session) == Some(session) {
                return false;
            }
            state.window.push(outcome);
            let forecast = predict(state.window.as_slice());
            let streak = current_streak(state.window.as_slice());
            let record = RoundRecord {
                id: SOURCE_ID.to_string(),
                session,
                die_1: d1,
                die_2: d2,
                die_3: d3,
                total,
                outcome,
                pattern: state.window.pattern_string(),
                predicted: forecast.outcome,
                confidence: forecast.confidence_label(),
                streak: streak.to_string(),
            };
            state.latest = Some(record.clone());
            state.history.push(record.clone());
            if state.history.len() > HISTORY_CAPACITY {
                state.history.remove(0);
            }
            // Clone the history out so the write-through happens outside
            // the lock and never blocks the read path.
            (record, state.history.clone())
        };

        if let Err(err) = self.store.save(&history) {
            warn!(%err, "history write-through failed, in-memory state stays authoritative");
        }
        info!(
            session = record.session,
            dice = %format!("{}-{}-{}", d1, d2, d3),
            total,
            result = record.outcome.label(),
            predicted = record.predicted.label(),
            confidence = %record.confidence,
            streak = %record.streak,
            "round accepted"
        );
        true
    }

    /// Most recent accepted record, if any round has been processed.
    pub fn latest_snapshot(&self) -> Option<RoundRecord> {
        self.state.read().latest.clone()
    }

    /// Full bounded history, oldest first.
    pub fn full_history(&self) -> Vec<RoundRecord> {
        self.state.read().history.clone()
    }

    /// Current pattern window length (window capacity can trail behind the
    /// history length).
    pub fn window_len(&self) -> usize {
        self.state.read().window.len()
    }
}
