//! Policy rule sections
//!
//! Each section checks one rule group. The evaluator runs them in order and
//! stops at the first rejection.

mod blacklist;
mod length;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use variety::character_variety_section;

use crate::config::PolicyConfig;
use crate::verdict::Rejection;

/// Result type for section evaluation functions.
/// - `Ok(())` - Section passed
/// - `Err(rejection)` - Section failed with a reason and message
pub(crate) type SectionResult = Result<(), Rejection>;

/// Signature shared by all sections.
pub(crate) type Section = fn(&str, &PolicyConfig) -> SectionResult;
