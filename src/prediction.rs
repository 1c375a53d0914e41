//! Weighted Markov ensemble forecaster.
//!
//! Orders 1-4 each predict the next outcome by majority vote among past
//! occurrences of the current trailing context. The four orders are blended
//! with weights proportional to their backtested hit rate over the same
//! window, so specific (high-order) contexts only dominate once they have
//! demonstrated discriminative power; otherwise the low orders, which see
//! more matches per context, carry the forecast.
//!
//! The backtest deliberately looks ahead: occurrences later in the window
//! vote on earlier positions. The resulting hit rate is a weighting signal
//! for ranking the orders against each other, not an out-of-sample accuracy
//! estimate.

use crate::constants::{MAX_ORDER, MIN_ENSEMBLE_LEN};
use crate::types::{Forecast, Outcome};

/// Backtested hit rate of order-`order` context matching over `window`.
///
/// Every position with a length-`order` context and a following outcome is
/// evaluated. The context's prediction is the majority vote over all other
/// occurrences of the identical context in the window; ties (including the
/// zero-information case where the context occurs nowhere else) resolve to
/// High. Returns 0.5 when the window is too short to evaluate anything.
pub fn estimate_accuracy(window: &[Outcome], order: usize) -> f64 {
    if window.len() < order + 1 {
        return 0.5;
    }
    let mut hits = 0usize;
    let mut evaluated = 0usize;
    let last_start = window.len() - order - 1;
    for i in 0..=last_start {
        let context = &window[i..i + order];
        let actual = window[i + order];
        let mut high = 0u32;
        let mut low = 0u32;
        for j in 0..=last_start {
            if j == i || &window[j..j + order] != context {
                continue;
            }
            match window[j + order] {
                Outcome::High => high += 1,
                Outcome::Low => low += 1,
            }
        }
        let predicted = if high >= low {
            Outcome::High
        } else {
            Outcome::Low
        };
        if predicted == actual {
            hits += 1;
        }
        evaluated += 1;
    }
    if evaluated == 0 {
        return 0.5;
    }
    hits as f64 / evaluated as f64
}

/// (high, low, total) counts over the whole window, ignoring context.
fn frequency_counts(window: &[Outcome]) -> (f64, f64, f64) {
    let high = window.iter().filter(|&&o| o == Outcome::High).count() as f64;
    let low = window.len() as f64 - high;
    (high, low, window.len() as f64)
}

/// (high, low, total) counts of the outcome following each earlier
/// occurrence of the current trailing `order`-context. Falls back to the
/// whole-window frequency when the context has never occurred before.
fn follower_counts(window: &[Outcome], order: usize) -> (f64, f64, f64) {
    debug_assert!(window.len() >= order);
    let context = &window[window.len() - order..];
    let mut high = 0.0;
    let mut low = 0.0;
    for i in 0..window.len() - order {
        if &window[i..i + order] != context {
            continue;
        }
        match window[i + order] {
            Outcome::High => high += 1.0,
            Outcome::Low => low += 1.0,
        }
    }
    let total = high + low;
    if total == 0.0 {
        frequency_counts(window)
    } else {
        (high, low, total)
    }
}

/// Forecast the next outcome over `window`.
///
/// Windows shorter than 5 use the unconditional class frequency: the
/// majority class is predicted (High on exact ties) with its share as the
/// confidence. Longer windows blend the order 1-4 follower distributions
/// with accuracy-proportional weights and normalize the two accumulated
/// scores into percentages; the winning side (High on ties) becomes the
/// forecast and its percentage the confidence.
pub fn predict(window: &[Outcome]) -> Forecast {
    if window.len() < MIN_ENSEMBLE_LEN {
        let (high, low, total) = frequency_counts(window);
        let share_high = if total == 0.0 { 0.5 } else { high / total };
        return if share_high >= 0.5 {
            Forecast {
                outcome: Outcome::High,
                confidence: share_high * 100.0,
            }
        } else {
            Forecast {
                outcome: Outcome::Low,
                confidence: (low / total) * 100.0,
            }
        };
    }

    let accuracies: Vec<f64> = (1..=MAX_ORDER)
        .rev()
        .map(|order| estimate_accuracy(window, order))
        .collect();
    let mut accuracy_sum: f64 = accuracies.iter().sum();
    if accuracy_sum == 0.0 {
        accuracy_sum = 1.0;
    }

    let mut score_high = 0.0;
    let mut score_low = 0.0;
    for (accuracy, order) in accuracies.iter().zip((1..=MAX_ORDER).rev()) {
        let (high, low, total) = follower_counts(window, order);
        let weight = accuracy / accuracy_sum;
        score_high += weight * (high / total);
        score_low += weight * (low / total);
    }

    let denom = score_high + score_low;
    let (percent_high, percent_low) = if denom == 0.0 {
        (50.0, 50.0)
    } else {
        (100.0 * score_high / denom, 100.0 * score_low / denom)
    };
    if percent_high >= percent_low {
        Forecast {
            outcome: Outcome::High,
            confidence: percent_high,
        }
    } else {
        Forecast {
            outcome: Outcome::Low,
            confidence: percent_low,
        }
    }
}
