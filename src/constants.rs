//! Service constants: capacities, the High/Low threshold, ensemble orders,
//! poll cadences and wire defaults.

/// Pattern window capacity: the statistical substrate never holds more than
/// 50 outcomes. Insertion order is the time axis of the Markov models.
pub const WINDOW_CAPACITY: usize = 50;

/// Bounded round history served by `/api/history`, oldest evicted first.
pub const HISTORY_CAPACITY: usize = 100;

/// A round resolves High ("Tài") when the 3-die total strictly exceeds this.
/// Total 10 is Low; total 11 is High.
pub const HIGH_THRESHOLD: u32 = 10;

/// Highest Markov order in the ensemble. Orders 1..=4 are blended with
/// weights proportional to their backtested hit rates.
pub const MAX_ORDER: usize = 4;

/// Below this window length the predictor skips the ensemble and falls back
/// to the whole-window class frequency.
pub const MIN_ENSEMBLE_LEN: usize = 5;

/// Upstream feed poll cadence in seconds.
pub const POLL_INTERVAL_SECS: u64 = 5;

/// Self-ping cadence in seconds (hosting keep-alive).
pub const KEEPALIVE_INTERVAL_SECS: u64 = 300;

/// Per-request timeout for the upstream feed and the keep-alive ping.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Constant source identifier stamped on every published record.
pub const SOURCE_ID: &str = "binhtool90";

/// Default upstream round feed.
pub const DEFAULT_SOURCE_URL: &str =
    "https://jakpotgwab.geightdors.net/glms/v1/notify/taixiu?platform_id=g8&gid=vgmn_101";

/// Default write-through history file.
pub const DEFAULT_HISTORY_FILE: &str = "history.json";
