// Fuzzy search
// Public interface for the sequence matcher

mod matcher;

pub use matcher::{build_matcher, Predicate};
