pub mod constants;
pub mod dice_mechanics;
pub mod engine;
pub mod env_config;
pub mod pattern_window;
pub mod prediction;
pub mod server;
pub mod source;
pub mod storage;
pub mod streak;
pub mod types;
