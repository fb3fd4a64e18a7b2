//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ToolError`]: the error taxonomy for tool dispatch
//! - [`string::truncate`]: UTF-8 safe truncation for log previews
//! - [`validation::ConfigIssue`]: issues found while validating configuration

pub mod error;
pub mod string;
pub mod validation;
