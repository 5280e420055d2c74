//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the conversion pipeline. Walks the source tree depth-first to
//! discover convertible images, producing a structured manifest that the
//! convert stage consumes.
//!
//! ## Directory Structure
//!
//! Any tree works; the scanner mirrors whatever it finds:
//!
//! ```text
//! assets/images/                   # Source root
//! ├── hero.jpg                     # → hero-{300,600,900,1200}.{webp,jpg}
//! ├── styles.css                   # Skipped (not an image)
//! └── gallery/                     # Mirrored into the output tree
//!     ├── one.png
//!     └── two.JPG                  # Extension match is case-insensitive
//! ```
//!
//! ## Candidate Selection
//!
//! A file is a candidate when its extension matches `jpg`, `jpeg`, or `png`,
//! compared case-insensitively. Everything else is skipped without comment;
//! the manifest only carries a count of skipped files so `check` can report
//! it. Directories are recorded even when empty, so the output tree mirrors
//! the source tree exactly.
//!
//! ## Ordering
//!
//! Entries are visited depth-first with siblings sorted by file name, so a
//! given tree always scans (and therefore converts) in the same order.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Manifest output from the scan stage
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub images: Vec<SourceImage>,
    pub directories: Vec<String>,
    /// Files under the root that did not match the candidate extensions
    pub skipped: usize,
}

/// A convertible source image.
///
/// All paths are relative to the scanned root, so the manifest is
/// location-independent and serializes without machine-specific prefixes.
#[derive(Debug, Serialize)]
pub struct SourceImage {
    /// Path relative to the root, e.g. `gallery/one.png`
    pub source_path: String,
    /// Directory part of `source_path`, empty for root-level files
    pub relative_dir: String,
    /// File name without extension, e.g. `one`
    pub stem: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

fn is_candidate(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Walk `root` depth-first and collect candidate images and directories.
///
/// `skip_dir` prunes one directory subtree entirely. The convert stage passes
/// the output root here when it sits inside the source tree, so already
/// converted variants are never picked up as new sources on a second run.
pub fn scan(root: &Path, skip_dir: Option<&Path>) -> Result<Manifest, ScanError> {
    let mut images = Vec::new();
    let mut directories = Vec::new();
    let mut skipped = 0usize;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| Some(e.path()) != skip_dir);

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            // depth 0 is the root itself, which is not mirrored
            if entry.depth() > 0 {
                let rel = path.strip_prefix(root).unwrap();
                directories.push(rel.to_string_lossy().to_string());
            }
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        if !is_candidate(path) {
            skipped += 1;
            continue;
        }

        let rel = path.strip_prefix(root).unwrap();
        let relative_dir = rel
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        images.push(SourceImage {
            source_path: rel.to_string_lossy().to_string(),
            relative_dir,
            stem,
        });
    }

    Ok(Manifest {
        images,
        directories,
        skipped,
    })
}
