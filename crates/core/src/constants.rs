//! Shared constants for hubstats.
//!
//! Centralizes the estimation heuristics and query limits used across crates.

/// Bytes per megabyte, the divisor for declared file sizes.
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Estimated megabytes per knowledge base.
pub const KNOWLEDGE_BASE_MB: f64 = 1.0;

/// Estimated megabytes per chat.
pub const CHAT_MB: f64 = 0.1;

/// Estimated megabytes per message.
pub const MESSAGE_MB: f64 = 0.01;

/// Share of file storage attributed to images.
///
/// A fixed proportional heuristic, not a sum over classified image files.
pub const IMAGE_STORAGE_RATIO: f64 = 0.3;

/// Number of entries in the overview's top-user and top-group rankings.
pub const TOP_RANKED: usize = 10;

/// Default number of rows for the per-user and per-group listings.
pub const DEFAULT_LISTING_LIMIT: usize = 50;

/// Maximum number of rows for any listing (DoS protection).
pub const MAX_LISTING_LIMIT: usize = 1000;

/// Seconds in one calendar-day bucket.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Nanoseconds per second, for message timestamp conversions.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
