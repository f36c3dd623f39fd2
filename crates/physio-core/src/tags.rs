//! Tag normalisation.
//!
//! Intake answers arrive as free text ("Low Back", "Unexplained Weight Loss",
//! "bending-forward"). Every matcher in the system compares tags only after
//! they have been folded to lower snake_case by [`normalize_tag`].

/// Fold a free-text tag to lower snake_case.
///
/// Leading/trailing whitespace is dropped, and any run of whitespace, `-`,
/// `/` or `_` collapses to a single `_`. Returns an empty string for blank
/// input.
pub fn normalize_tag(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for c in raw.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '/' || c == '_' {
            pending_sep = !out.is_empty();
            continue;
        }
        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Normalise a list of tags, dropping blanks. Order is preserved.
pub fn normalize_all<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    raw.into_iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect()
}

/// True if `observed` equals `wanted` or contains it as a whole run of
/// `_`-delimited segments (`severe_night_sweats` contains `night_sweats`,
/// `sweats` does not contain `night_sweats`).
pub fn tag_contains(observed: &str, wanted: &str) -> bool {
    if wanted.is_empty() {
        return false;
    }
    if observed == wanted {
        return true;
    }
    observed
        .match_indices(wanted)
        .any(|(start, _)| {
            let end = start + wanted.len();
            let left_ok = start == 0 || observed.as_bytes()[start - 1] == b'_';
            let right_ok = end == observed.len() || observed.as_bytes()[end] == b'_';
            left_ok && right_ok
        })
}

/// Segments too common across red-flag tags to identify one on their own.
const GENERIC_SEGMENTS: &[&str] = &[
    "age", "arm", "bilateral", "gt", "history", "left", "leg", "loss", "night", "pain", "recent",
    "right", "severe", "unexplained", "use",
];

/// True if `tag` has at least one segment that is neither generic nor
/// numeric (`weight_loss` does, `recent_history` and `age_gt_70` do not).
pub fn has_specific_segment(tag: &str) -> bool {
    tag.split('_').any(|segment| {
        !segment.is_empty()
            && !GENERIC_SEGMENTS.contains(&segment)
            && !segment.bytes().all(|b| b.is_ascii_digit())
    })
}
