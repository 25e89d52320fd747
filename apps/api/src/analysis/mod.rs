//! Resume analysis: the fixed ATS rule table, the scoring engine, and the
//! HTTP handlers that feed it typed or extracted resume text.

pub mod engine;
pub mod handlers;
pub mod rules;
pub mod suggestions;

pub use engine::{analyze, AnalysisResult};
