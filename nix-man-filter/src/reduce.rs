// SPDX-FileCopyrightText: 2024 Jade Lovelace
//
// SPDX-License-Identifier: BSD-2-Clause OR MIT

//! Boiling an option entry down to its name and description
use std::borrow::Cow;

use tracing::debug;

/// Lines carrying any of these are option metadata rather than description.
const METADATA_MARKERS: &[&str] = &[
    r"\fIType:",
    r"\fIDefault:",
    r"\fIExample:",
    r"\fIDeclared by:",
    "<nixpkgs/",
];

/// Lines that introduce an admonition; the line after them is its text.
const CALLOUTS: &[&str] = &["Note", "Important"];

/// Appended to every reduced entry no matter what it contained.
const ENTRY_END: &[&str] = &[".RE", ".RE", ".PP"];

fn is_metadata(line: &str) -> bool {
    METADATA_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Rewrites an entry to only its name line and description.
///
/// Metadata lines and blank lines are dropped, and a `Note`/`Important` line is turned into an
/// indented block holding the keyword in bold and the single line following it. A callout whose
/// text runs over several lines only gets the first one; the rest are treated as ordinary lines.
pub fn reduce_section(entry: &str) -> String {
    let lines = entry.split('\n').collect::<Vec<_>>();
    let mut out: Vec<Cow<'_, str>> = vec![lines[0].trim().into()];

    let mut idx = 1;
    while idx < lines.len() {
        let line = lines[idx].trim();

        if is_metadata(line) {
            idx += 1;
            continue;
        }

        if CALLOUTS.contains(&line) {
            debug!(callout = line, "normalizing callout");
            let text = lines.get(idx + 1).map(|l| l.trim()).unwrap_or("");
            out.push(".sp".into());
            out.push(".RS 4".into());
            out.push(format!(r"\fB{}\fP", line).into());
            out.push(".br".into());
            out.push(text.into());
            out.push(".RE".into());
            idx += 2;
            continue;
        }

        if !line.is_empty() {
            out.push(line.into());
        }
        idx += 1;
    }

    out.extend(ENTRY_END.iter().map(|&directive| Cow::Borrowed(directive)));
    out.join("\n")
}
