//! Rule tokens and the letter-level predicates behind them.
//!
//! A rule token is the user-facing text for a single-word filter
//! (`noun`, `6-letters`, `double`, ...). The parser turns it into a
//! [`PredicateSpec`](crate::PredicateSpec); the helpers in `predicates.rs` are
//! the pure letter tests the evaluator dispatches to.
//!
//! ```text
//! "6-Letters " ──parse_rule──▶ PredicateSpec::Length(6)
//! "xyzzy"      ──parse_rule──▶ PredicateSpec::Unconstrained   (warns)
//! "xyzzy"      ──parse_rule_strict──▶ Err(UnknownRule)
//! ```

#[path = "rules/parser.rs"]
mod parser;
#[path = "rules/predicates.rs"]
pub mod predicates;


pub use parser::{parse_rule, parse_rule_list, parse_rule_strict, parse_rules};
