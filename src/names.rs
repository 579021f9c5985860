//! Attribute name handling: canonical keys, file slugs, display casing and
//! first-fit keyword lookup.
//!
//! Objects and Views refer to attributes by display name, so every
//! comparison goes through [`normalize`]. File names go through
//! [`slugify`].

/// Canonical key used for attribute equality: trimmed and lowercased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Filesystem-safe identifier token for a display name.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen and strips leading/trailing hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
///
/// Used when echoing canonical keys back to the operator.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// Return the first keyword hit and its rule payload. A rule hits when one
/// of its keywords is a substring of `haystack`; rule order is priority order.
pub fn first_keyword_match<'a, T>(
    haystack: &str,
    rules: impl IntoIterator<Item = (&'a [&'a str], &'a T)>,
) -> Option<(&'a str, &'a T)>
where
    T: 'a,
{
    rules.into_iter().find_map(|(keys, payload)| {
        keys.iter()
            .find(|k| haystack.contains(**k))
            .map(|k| (*k, payload))
    })
}
