//! Shared constants
//!
//! Limits and thresholds mirrored from the backend contracts.

/// Default number of TAF files per library page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Page size choices offered in the library toolbar
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [25, 50, 100];

/// Hard clamp for page size accepted by the backend
pub const MAX_PAGE_SIZE: usize = 500;

/// Maximum number of files per batch analyze/process request
pub const MAX_BATCH_FILES: usize = 100;

/// Maximum number of items per metadata search request
pub const MAX_METADATA_SEARCH_ITEMS: usize = 50;

/// Confidence at or above which a batch match is auto-selected
pub const AUTO_MATCH_THRESHOLD: f64 = 0.95;

/// Minimum confidence for a candidate to be shown at all
pub const WEAK_MATCH_THRESHOLD: f64 = 0.60;

/// Number of cover suggestions requested per search
pub const COVER_SEARCH_LIMIT: usize = 5;

/// Language code used when nothing else is known
pub const DEFAULT_LANGUAGE: &str = "de-de";

/// Log panel ring buffer capacity
pub const LOG_CAPACITY: usize = 2000;

/// Request timeout for backend calls, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
