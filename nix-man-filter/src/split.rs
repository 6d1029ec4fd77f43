// SPDX-FileCopyrightText: 2024 Jade Lovelace
//
// SPDX-License-Identifier: BSD-2-Clause OR MIT

//! Cutting a man page into per-option chunks
use once_cell::sync::Lazy;
use regex::Regex;

/// A `.PP` request and everything up to the end of its line, including any blank lines after it.
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.PP\s*\n").expect("paragraph break pattern is valid"));

/// Splits `page` at every paragraph break, in order. The first chunk is usually the page
/// preamble; nothing is dropped here.
pub fn split_entries(page: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK.split(page)
}
