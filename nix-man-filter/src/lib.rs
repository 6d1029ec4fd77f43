// SPDX-FileCopyrightText: 2024 Jade Lovelace
//
// SPDX-License-Identifier: BSD-2-Clause OR MIT

//! library components of nix-man-filter
pub mod error;
pub mod man;
pub mod name;
pub mod page;
pub mod reduce;
pub mod split;

pub use crate::error::Error;

use crate::man::{Locate, ScratchPage, View};
use crate::name::option_name;
use crate::reduce::reduce_section;
use crate::split::split_entries;

use tracing::{debug, info};

use std::fs;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// One option entry picked out of the manual.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Option name with escapes removed, e.g. `boot.loader.timeout`
    pub name: String,

    /// roff for the entry, reduced if only descriptions were asked for
    pub text: String,
}

/// What to filter and where to put the result.
#[derive(Clone, Debug)]
pub struct Options {
    /// Literal, case-sensitive prefix of the option names to keep
    pub prefix: String,

    /// Strip entries down to their names and descriptions
    pub description_only: bool,

    /// Directory the filtered page is written into
    pub out_dir: PathBuf,
}

/// Picks the entries of `content` whose option names start with `prefix`, in page order.
///
/// Entries without a recognizable name are never picked, and entries that end up blank are
/// dropped.
pub fn extract_sections(content: &str, prefix: &str, description_only: bool) -> Vec<Section> {
    debug!(prefix, "extracting sections");
    let mut matched = Vec::new();
    let mut count = 0;

    for (idx, entry) in split_entries(content).enumerate() {
        count += 1;
        let name = match option_name(entry) {
            Some(name) => name,
            None => continue,
        };

        if !name.starts_with(prefix) {
            debug!(section = idx + 1, option = %name, "no match");
            continue;
        }
        debug!(section = idx + 1, option = %name, "matched");

        let text = if description_only {
            reduce_section(entry)
        } else {
            entry.to_string()
        };
        if !text.trim().is_empty() {
            matched.push(Section { name, text });
        }
    }

    debug!(sections = count, matched = matched.len(), "done extracting");
    matched
}

/// Reads the manual source at `path`.
pub fn read_manual(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading manual");
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = content.len(), "read manual");
    Ok(content)
}

/// Finds the manual and returns the sections selected by `opts`. Finding nothing is an
/// [`Error::NoMatches`].
pub fn find_options(opts: &Options, locator: &dyn Locate) -> Result<Vec<Section>> {
    let path = locator.locate()?;
    let content = read_manual(&path)?;

    let sections = extract_sections(&content, &opts.prefix, opts.description_only);
    if sections.is_empty() {
        return Err(Error::NoMatches {
            prefix: opts.prefix.clone(),
        });
    }
    Ok(sections)
}

/// Writes the filtered page for `opts`, shows it with `viewer`, and deletes it again once the
/// viewer returns or fails.
pub fn run(opts: &Options, locator: &dyn Locate, viewer: &dyn View) -> Result<()> {
    let sections = find_options(opts, locator)?;

    let page = ScratchPage::create(&opts.out_dir, &opts.prefix, &sections)?;
    info!(path = %page.path().display(), "created filtered man page");

    let viewed = viewer.view(page.path());
    drop(page);
    viewed
}
