//! Downloads badge
//!
//! # Overview
//!
//! Sums the lifetime download counts of a fixed list of projects hosted on a mod distribution platform and renders
//! the total as a [shields.io endpoint](https://shields.io/badges/endpoint-badge) badge document.
//!
//! The pipeline is linear: for each project one request is made through an [`api::Client`], counts are summed,
//! the sum is formatted by [`message::format_downloads`] (`"999 downloads"`, `"400.0k downloads"`,
//! `"1.2M downloads"`) and the resulting [`document::BadgeDocument`] is written to disk.
//! Any failed request aborts the run before anything is written.

pub mod api;
pub mod document;
#[cfg(feature = "generator")]
pub mod generator;
pub mod message;

pub use document::{BadgeDocument, BadgeStyle};
#[cfg(feature = "generator")]
pub use generator::{BadgeGenerator, Publication, WriteOutcome};
