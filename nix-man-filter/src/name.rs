// SPDX-FileCopyrightText: 2024 Jade Lovelace
//
// SPDX-License-Identifier: BSD-2-Clause OR MIT

//! Finding the option name at the top of an entry
use once_cell::sync::Lazy;
use regex::Regex;

/// roff's zero-width escape before a dot, which the manual puts between option path components
/// so that lines don't break there.
pub const NONBREAKING_DOT: &str = r"\&.";

/// Bold spans an entry may start with, strictest first. The first one that matches wins.
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // bold text with no escapes at all
        r"^\\fB([^\\]+)\\fR",
        // dotted paths, escapes allowed
        r"^\\fB([\w\d\.\\&-]+)\\fR",
        // anything else held together by `\&`, e.g. paths containing `<name>`
        r"^\\fB([^\\]*(?:\\&[^\\]*)*?)\\fR",
    ]
    .iter()
    .map(|pat| Regex::new(pat).expect("option name pattern is valid"))
    .collect()
});

/// The name exactly as it appears in the markup, escapes included.
pub fn raw_option_name(entry: &str) -> Option<&str> {
    let entry = entry.trim();
    NAME_PATTERNS
        .iter()
        .find_map(|re| re.captures(entry)?.get(1))
        .map(|m| m.as_str())
}

/// The option name of an entry with its non-breaking dots turned back into plain dots, or `None`
/// if the entry doesn't start with one.
pub fn option_name(entry: &str) -> Option<String> {
    raw_option_name(entry).map(|raw| raw.replace(NONBREAKING_DOT, "."))
}
