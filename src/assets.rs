//! Static asset copying.
//!
//! Mirrors a source directory tree into the output, byte for byte. Assets are
//! whatever the template needs at runtime (avatar image, icons, stylesheets),
//! copied without transformation.
//!
//! ## Rules
//!
//! - Directories are recreated at the mirrored path with the source entry's
//!   permission bits.
//! - Files are copied verbatim. An existing destination file is truncated.
//! - Entries named exactly `.gitkeep` are skipped: they are repo placeholders,
//!   not content. Their containing directory is still created, since the walk
//!   yields the directory entry itself.
//!
//! The walk is depth-first with directories before their contents, so a
//! destination directory always exists before files land in it. There is no
//! rollback: a failed byte copy can leave a truncated destination file behind,
//! and the error says which path it was.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("error walking static source: {0}")]
    Traversal(#[from] walkdir::Error),
    #[error("error creating {}: {}", .path.display(), .source)]
    Create { path: PathBuf, source: io::Error },
    #[error("error copying {}: {}", .path.display(), .source)]
    Copy { path: PathBuf, source: io::Error },
}

/// Recursively copy `src` into `dst`, skipping `.gitkeep` placeholders.
///
/// Returns the number of files copied. Fails on the first error; entries
/// already copied stay in place.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize, CopyError> {
    let mut copied = 0;

    for entry in WalkDir::new(src) {
        let entry = entry?;
        if entry.file_name() == ".gitkeep" {
            continue;
        }

        // Walk entries always live under the walk root
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walk entry outside walk root");
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            // Newly created directories take the source entry's permission
            // bits; directories that already exist are left alone.
            if !target.is_dir() {
                fs::create_dir_all(&target).map_err(|source| CopyError::Create {
                    path: target.clone(),
                    source,
                })?;
                let perms = entry.metadata()?.permissions();
                fs::set_permissions(&target, perms).map_err(|source| CopyError::Create {
                    path: target,
                    source,
                })?;
            }
        } else {
            let mut reader = File::open(entry.path()).map_err(|source| CopyError::Copy {
                path: entry.path().to_path_buf(),
                source,
            })?;
            let mut writer = File::create(&target).map_err(|source| CopyError::Create {
                path: target.clone(),
                source,
            })?;
            io::copy(&mut reader, &mut writer).map_err(|source| CopyError::Copy {
                path: target,
                source,
            })?;
            copied += 1;
        }
        // reader/writer dropped here, before the walk moves on
    }

    Ok(copied)
}
