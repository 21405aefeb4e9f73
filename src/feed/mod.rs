//! Feed parsing: raw SWPC text to merged, rank-indexed records.
//!
//! ## Submodules
//!
//! - [`extract`]: Data line filtering, ordering, and tokenizing
//! - [`schema`]: Positional layouts of the three feeds
//! - [`record`]: Mapping tokens onto named-field records
//! - [`merge`]: Rank-based alignment of the three feeds
//!
//! ## Data Flow
//!
//! ```text
//! raw text ──▶ extract_lines() ──▶ RawLine
//!                                    │
//!                                    ▼
//!                      DataRecord::map(line, schema)
//!                                    │
//!         magnetometer ─┐            │
//!         plasma ───────┼────────────┘
//!         k-index ──────┘
//!                │
//!                ▼
//!        MergedSet::merge()
//! ```

pub mod extract;
pub mod merge;
pub mod record;
pub mod schema;

pub use extract::{extract_lines, RawLine};
pub use merge::{MergedRecord, MergedSet};
pub use record::{parse_feed, DataRecord};
pub use schema::{FeedKind, FeedSchema, KINDEX, MAGNETOMETER, PLASMA};
