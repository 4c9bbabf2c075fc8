pub mod defaults;
pub mod error;
pub mod output;
pub mod rewrite;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{FileFailure, RewriteSummary};
