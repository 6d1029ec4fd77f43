// SPDX-FileCopyrightText: 2024 Jade Lovelace
//
// SPDX-License-Identifier: BSD-2-Clause OR MIT

//! Talking to `man`: finding the manual, showing the filtered page, and cleaning up after it
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{self, Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGQUIT};
use signal_hook::SigId;
use tracing::{debug, warn};

use crate::page::{page_file_name, write_page};
use crate::{Error, Result, Section};

/// The manual page we filter.
pub const MANUAL_PAGE: &str = "configuration.nix";

/// Finds the roff source of the manual.
pub trait Locate {
    fn locate(&self) -> Result<PathBuf>;
}

/// Shows a man page to the user, returning once they are done with it.
pub trait View {
    fn view(&self, page: &Path) -> Result<()>;
}

/// Asks `man -w` where the manual lives.
pub struct ManLocator {
    program: OsString,
}

impl ManLocator {
    /// Uses `program` in place of `man`.
    pub fn with_program(program: impl Into<OsString>) -> ManLocator {
        ManLocator {
            program: program.into(),
        }
    }
}

impl Default for ManLocator {
    fn default() -> Self {
        Self::with_program("man")
    }
}

impl Locate for ManLocator {
    fn locate(&self) -> Result<PathBuf> {
        debug!("looking for the {} manual", MANUAL_PAGE);
        let fail = |reason: String| Error::Locate {
            page: MANUAL_PAGE,
            reason,
        };

        let output = Command::new(&self.program)
            .args(&["-w", MANUAL_PAGE])
            .output()
            .map_err(|e| fail(format!("failed to run man: {}", e)))?;
        if !output.status.success() {
            return Err(fail(format!(
                "man -w exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        // man -w prints one path per matching page; the first one is what `man` would show
        let stdout = String::from_utf8_lossy(&output.stdout);
        let path = stdout.lines().next().map(str::trim).unwrap_or("");
        if path.is_empty() {
            return Err(fail("man -w printed no path".to_string()));
        }

        debug!(path, "found manual");
        Ok(PathBuf::from(path))
    }
}

/// A manual source given up front.
pub struct FixedLocator(pub PathBuf);

impl Locate for FixedLocator {
    fn locate(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Keeps SIGINT and SIGQUIT from killing this process while a child has the terminal, like
/// `system(3)` does. The child still gets them with their default behavior, since exec resets
/// caught signals.
struct SignalShield {
    ids: Vec<SigId>,
    caught: Arc<AtomicBool>,
}

impl SignalShield {
    fn raise() -> io::Result<SignalShield> {
        let caught = Arc::new(AtomicBool::new(false));
        let ids = [SIGINT, SIGQUIT]
            .iter()
            .map(|&sig| signal_hook::flag::register(sig, Arc::clone(&caught)))
            .collect::<io::Result<Vec<_>>>()?;
        Ok(SignalShield { ids, caught })
    }

    fn caught(&self) -> bool {
        self.caught.load(Ordering::Relaxed)
    }
}

impl Drop for SignalShield {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}

/// Runs `man` on the page in the foreground.
pub struct ManViewer {
    program: OsString,
}

impl ManViewer {
    /// Uses `program` in place of `man`.
    pub fn with_program(program: impl Into<OsString>) -> ManViewer {
        ManViewer {
            program: program.into(),
        }
    }
}

impl Default for ManViewer {
    fn default() -> Self {
        Self::with_program("man")
    }
}

impl View for ManViewer {
    fn view(&self, page: &Path) -> Result<()> {
        // without a slash man would look the argument up as a page name
        let page = path::absolute(page).map_err(Error::Viewer)?;
        debug!(page = %page.display(), "opening man page");

        let shield = SignalShield::raise().map_err(Error::Viewer)?;
        let status = Command::new(&self.program)
            .arg(&page)
            .status()
            .map_err(Error::Viewer)?;
        if shield.caught() {
            debug!("viewer was interrupted");
        }
        drop(shield);

        if !status.success() {
            warn!(%status, "man exited unsuccessfully");
        }
        Ok(())
    }
}

/// A filtered page on disk that is deleted when this goes out of scope, whether or not anyone
/// got to look at it.
pub struct ScratchPage {
    path: PathBuf,
}

impl ScratchPage {
    /// Writes `sections` as a man page for `prefix` into `dir`.
    ///
    /// A page left half-written by a failure is removed before returning the error.
    pub fn create(dir: &Path, prefix: &str, sections: &[Section]) -> Result<ScratchPage> {
        let page = ScratchPage {
            path: dir.join(page_file_name(prefix)),
        };
        debug!(path = %page.path.display(), sections = sections.len(), "writing filtered man page");

        let write_err = |source: io::Error| Error::Write {
            path: page.path.clone(),
            source,
        };
        let h = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&page.path)
            .map_err(write_err)?;
        let mut h = BufWriter::new(h);
        write_page(&mut h, sections)
            .and_then(|_| h.flush())
            .map_err(write_err)?;
        drop(h);

        Ok(page)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchPage {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed filtered man page"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => (),
            Err(e) => warn!(path = %self.path.display(), "could not remove filtered man page: {}", e),
        }
    }
}
