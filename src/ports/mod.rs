//! Ports (trait boundaries) between the engine and its callers.
//!
//! The controller and the arena only see these traits; concrete strategies
//! and observers are plugged in behind them.

pub mod observer;
pub mod strategy;

pub use observer::MatchObserver;
pub use strategy::Strategy;
