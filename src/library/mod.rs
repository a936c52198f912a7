// Kiss library
// Turns a gist listing into the set of runnable recipes it contains

use crate::github::Gist;
use crate::search::Predicate;

/// Marker token a gist description must start with to count as a kiss.
pub const KISS_MARKER: &str = "kiss";

/// A runnable recipe: a gist whose description starts with the marker.
#[derive(Debug, Clone)]
pub struct Kiss {
    /// Display name: the description with the marker stripped, original
    /// casing preserved.
    pub name: String,
    pub gist: Gist,
}

impl Kiss {
    /// Build a kiss from a gist, or `None` if the gist is not one.
    /// Gists without a description are never kisses.
    pub fn from_gist(gist: &Gist) -> Option<Self> {
        let description = gist.description.as_deref()?;
        let name = strip_marker(description)?;
        Some(Self {
            name: name.trim_start().to_string(),
            gist: gist.clone(),
        })
    }
}

/// Strip the marker prefix case-insensitively, returning the rest of
/// the description. Walks characters rather than byte-slicing a fixed
/// offset, so case folds that change byte length (U+212A KELVIN SIGN
/// lowercases to `k`) cannot skew the split point.
fn strip_marker(description: &str) -> Option<&str> {
    let mut rest = description;
    for marker_ch in KISS_MARKER.chars() {
        let ch = rest.chars().next()?;
        if !ch.to_lowercase().eq(marker_ch.to_lowercase()) {
            return None;
        }
        rest = &rest[ch.len_utf8()..];
    }
    Some(rest)
}

/// Restrict gists to kisses, then apply the predicate to each kiss's name.
/// The marker prefix check happens here, never inside the matcher.
/// Input order is preserved.
pub fn filter_kisses(gists: &[Gist], predicate: &Predicate) -> Vec<Kiss> {
    gists
        .iter()
        .filter_map(Kiss::from_gist)
        .filter(|kiss| predicate.matches(&kiss.name))
        .collect()
}
