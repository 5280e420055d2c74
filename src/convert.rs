//! Image conversion pipeline.
//!
//! Stage 2 of the conversion pipeline. Takes the manifest from the scan stage
//! and renders every source image into its WebP and JPEG width variants.
//!
//! ## Output Structure
//!
//! ```text
//! processed/
//! ├── hero-300.webp              # WebP variants first, ascending width
//! ├── hero-600.webp
//! ├── hero-900.webp
//! ├── hero-1200.webp
//! ├── hero-300.jpg               # Then JPEG variants, same widths
//! ├── hero-600.jpg
//! ├── hero-900.jpg
//! ├── hero-1200.jpg
//! └── gallery/                   # Source directories mirrored, even empty ones
//!     └── one-300.webp ...
//! ```
//!
//! Every directory in the source tree is created in the output tree before
//! any image is converted, so the mirror is complete even when a run aborts.
//!
//! ## Failure Mode
//!
//! The run is fail-fast: the first error ends it. Files already written stay
//! on disk; a rerun overwrites them in place, so partial output is safe to
//! leave behind. One `Created:` line is printed per file written.

use crate::config::PipelineConfig;
use crate::imaging::{
    BackendError, ImageBackend, Quality, ResizeParams, RustBackend, VariantConfig, plan_variants,
};
use crate::output;
use crate::scan::{self, Manifest, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// Totals for a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub images: usize,
    pub files: usize,
}

/// Detect an output root nested inside the source tree.
///
/// The default layout nests the output under the source; without pruning, a
/// second run would pick up first-run variants as new sources. The returned
/// path is respelled as `source` + remainder so it compares equal to the
/// paths the directory walker yields.
pub fn nested_output(source: &Path, output: &Path) -> Option<PathBuf> {
    match output.strip_prefix(source) {
        Ok(rel) if !rel.as_os_str().is_empty() => Some(source.join(rel)),
        _ => None,
    }
}

/// Scan `source` and convert everything into `output` with the real backend.
pub fn run(
    source: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> Result<ConvertReport, ConvertError> {
    let backend = RustBackend::new();
    let skip = nested_output(source, output);
    let manifest = scan::scan(source, skip.as_deref())?;
    let variants = VariantConfig {
        widths: config.images.widths.clone(),
        quality: Quality::new(config.images.quality),
    };
    convert_with_backend(&backend, &manifest, source, output, &variants)
}

/// Convert a scanned manifest using a specific backend (allows testing with mock).
pub fn convert_with_backend(
    backend: &impl ImageBackend,
    manifest: &Manifest,
    source_root: &Path,
    output_root: &Path,
    variants: &VariantConfig,
) -> Result<ConvertReport, ConvertError> {
    std::fs::create_dir_all(output_root)?;
    for dir in &manifest.directories {
        std::fs::create_dir_all(output_root.join(dir))?;
    }

    let mut files = 0usize;

    for image in &manifest.images {
        let source_path = source_root.join(&image.source_path);
        let original = backend.identify(&source_path)?;
        let output_dir = output_root.join(&image.relative_dir);

        for variant in plan_variants(&image.stem, original, variants) {
            let output_path = output_dir.join(&variant.file_name);
            backend.resize(&ResizeParams {
                source: source_path.clone(),
                output: output_path.clone(),
                width: variant.width,
                height: variant.height,
                quality: variants.quality,
            })?;
            output::print_file_created(&output_path);
            files += 1;
        }
    }

    Ok(ConvertReport {
        images: manifest.images.len(),
        files,
    })
}
