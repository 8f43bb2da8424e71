//! Display formatting for provisioning transcripts.
//!
//! Domain reports implement [`std::fmt::Display`] directly; wrapper types
//! cover the contextual pieces (per-device failure lines, the run footer).
//! The rendered text is the tool's console contract: operator-facing strings
//! are preserved verbatim, Spanish included, so transcripts remain
//! recognizable to the people who run the lab.

pub mod report;
pub mod summary;

// Re-export commonly used types for convenience
pub use report::FailureLine;
pub use summary::RunSummary;
