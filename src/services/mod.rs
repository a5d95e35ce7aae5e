//! Business logic layer
//!
//! - `aggregation`: pulls provider payloads and normalizes them into the store
//! - `feed`: read-side views (listing, search, trending, per-user overlay)

pub mod aggregation;
pub mod feed;

pub use aggregation::AggregationService;
pub use feed::FeedService;
