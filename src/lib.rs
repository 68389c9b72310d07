//! Floodgate - In-Process Request Admission Control
//!
//! This crate implements a per-client sliding-window rate limiter. Each
//! client key carries a window of recent-request timestamps; a check admits
//! the request when fewer than the configured maximum fall inside the
//! trailing window, and otherwise rejects it with a retry-after hint. An
//! inline compaction pass drops idle clients so the tracked-key table stays
//! bounded.
//!
//! State lives entirely in one process and is reset on restart. Sharing
//! limits across processes is a deployment concern outside this crate.

pub mod clock;
pub mod config;
pub mod error;
pub mod ratelimit;
