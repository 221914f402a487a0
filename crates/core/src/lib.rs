//! Core domain types and aggregation primitives for hubstats
//!
//! This crate contains the entities read from the content hub, the pure
//! classification/estimation logic, and the derived summary types shared
//! across all other crates. No I/O happens here.

mod config;
mod constants;
mod entities;
mod estimate;
mod media;
mod period;
mod stats;

pub use config::*;
pub use constants::*;
pub use entities::*;
pub use estimate::*;
pub use media::*;
pub use period::*;
pub use stats::*;
