//! Turns the upstream rate page into a complete [`interface::RateSnapshot`].
//!
//! The page is parsed into an [`HtmlDocument`], scanned by the strategies of
//! an [`HtmlSnapshotExtractor`] and the partial result is totalled by a
//! [`FallbackMerger`].

pub mod document;
mod extractor;
pub mod merge;
pub mod strategy;
pub mod upstream;

pub use document::{HtmlDocument, Node};
pub use extractor::HtmlSnapshotExtractor;
pub use merge::{merge, FallbackMerger};
pub use strategy::ExtractionStrategy;
pub use upstream::{RateSource, UpstreamClient};
