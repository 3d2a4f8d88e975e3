//! Bulk brand-name rename for the Chiang Mai Guide source tree
//!
//! Walks a project directory, filters files by extension and a set of
//! excluded directory segments, and applies an ordered list of literal
//! string substitutions in place. Files are rewritten only when their
//! content actually changed, which makes a second run a no-op.

pub mod error;
pub mod rules;
pub mod walk;

pub use error::{RenameError, RenameResult};
pub use rules::{apply_rules, Rule, BRAND_RULES};
pub use walk::{rewrite_file, scan_tree, should_process, FileOutcome, ScanSummary};
