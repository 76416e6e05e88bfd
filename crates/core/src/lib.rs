//! Core of vh-check: samples the four viewport height units, keeps a
//! deduplicated history of distinct layout states and derives whether
//! `lvh` and `svh` ever changed.

pub mod checker;
pub mod config;
pub mod error;
pub mod history;
pub mod sampler;
pub mod stability;

pub use checker::{Checker, LayoutEvent};
pub use config::CheckerOptions;
pub use error::{ConfigError, SampleError};
pub use history::{HistoryLog, RecordOutcome};
pub use sampler::{Clock, Sampler, UnitProbe};
pub use stability::{StabilityEvaluator, StabilityFlags};
