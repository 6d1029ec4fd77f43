// SPDX-FileCopyrightText: 2024 Jade Lovelace
//
// SPDX-License-Identifier: BSD-2-Clause OR MIT

//! Writing filtered entries out as a standalone man page
use std::io;

use crate::Section;

/// Name of the page written for `prefix`, relative to the output directory.
pub fn page_file_name(prefix: &str) -> String {
    format!("configuration.nix.{}.5", prefix)
}

fn write_header(mut writer: impl io::Write) -> io::Result<()> {
    writeln!(
        writer,
        r#".TH "CONFIGURATION.NIX" "5" "2024" "NixOS" "NixOS Manual (filtered)""#
    )?;
    writeln!(writer, r#".SH "FILTERED OPTIONS""#)?;
    Ok(())
}

fn write_footer(mut writer: impl io::Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, r#".SH "NOTES""#)?;
    writeln!(
        writer,
        "This is a filtered version of the configuration.nix manual."
    )?;
    Ok(())
}

/// Writes a complete man page holding `sections` in order, one newline between each.
pub fn write_page(mut writer: impl io::Write, sections: &[Section]) -> io::Result<()> {
    write_header(&mut writer)?;
    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(section.text.as_bytes())?;
    }
    write_footer(&mut writer)
}
