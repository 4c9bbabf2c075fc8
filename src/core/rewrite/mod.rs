//! Recursive, case-preserving whole-word rewrite of a directory tree.
//!
//! Walks the tree, reads every file whose name ends with an eligible suffix,
//! substitutes the source word with the replacement word (re-cased per match),
//! and writes the file back only when its content changed.

mod case;
mod walk;

pub use case::{substitute, CaseClass, WordPair, REPLACEMENT_WORD, SOURCE_WORD};
pub use walk::{is_eligible, process, process_directory, rewrite_file, RewriteOptions};
