//! Stylesheet checks: properties that should be utility classes, and hardcoded values.

mod scanner;
mod table;

pub use scanner::StyleScanner;
pub use table::{StyleCategory, StyleRule, StyleRuleTable};
