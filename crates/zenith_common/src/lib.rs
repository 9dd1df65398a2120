//! Zenith Common - Shared types and pipelines for the Zenith Protocol
//!
//! Holds the static principle catalog, the structured analysis report,
//! the verdict request pipeline with its tiered transport fallback, and
//! the share-card image pipeline. The CLI in `zenithctl` owns no business
//! logic; everything it renders comes from here.

pub mod card;
pub mod config;
pub mod image_gen;
pub mod pipeline;
pub mod principles;
pub mod prompt;
pub mod report;
pub mod transport;
pub mod verdict;

pub use config::ZenithConfig;
pub use pipeline::ZenithPipeline;
pub use principles::{Category, PrincipleItem, PRINCIPLES};
pub use verdict::{Verdict, VerdictResult};
