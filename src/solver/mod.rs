//! Automatic players
//!
//! Strategies that pick letters without a human, plus the loop that plays a
//! game to the end with one of them.

mod engine;
pub mod strategy;

pub use engine::play_out;
pub use strategy::{
    CandidateStrategy, FREQUENCY_ORDER, FrequencyStrategy, RandomStrategy, Strategy, StrategyType,
};
