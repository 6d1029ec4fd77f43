// SPDX-FileCopyrightText: 2024 Jade Lovelace
//
// SPDX-License-Identifier: BSD-2-Clause OR MIT

//! Everything that can stop a filtering run
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `man -w` (or whatever stands in for it) could not tell us where the manual is.
    #[error("could not locate the {page} manual: {reason}")]
    Locate { page: &'static str, reason: String },

    #[error("could not read manual {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write filtered man page {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// There is nowhere to put the filtered page.
    #[error("could not determine the current directory to write the filtered page into: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("could not run the man page viewer: {0}")]
    Viewer(#[source] io::Error),

    /// Not a failure of the tool, but there is nothing to show.
    #[error("no options found matching prefix: {prefix}")]
    NoMatches { prefix: String },
}
