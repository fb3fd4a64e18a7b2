//! Chat front end: free text → at most one planned tool call.

pub mod classifier;
pub mod entities;

pub use classifier::IntentClassifier;
pub use entities::{ChatAnalysis, Intent};
