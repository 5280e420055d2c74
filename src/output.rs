//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The `check` inventory
//! leads with each image's semantic identity (positional index + stem) and
//! shows the filesystem path as secondary context via an indented `Source:`
//! line. The `convert` stream is the one deliberately file-centric surface:
//! one `Created:` line per file written, so a run can be diffed against the
//! output tree.
//!
//! # Output Format
//!
//! ## Convert
//!
//! ```text
//! Created: assets/images/processed/hero-300.webp
//! Created: assets/images/processed/hero-600.webp
//! ...
//! Image processing complete: 2 images, 16 files written
//! ```
//!
//! ## Check
//!
//! ```text
//! Images
//! 001 hero
//!     Source: hero.jpg
//! 002 one
//!     Source: gallery/one.png
//!
//! Directories
//!     gallery/
//!
//! Config
//!     Widths: 300, 600, 900, 1200
//!     Quality: 80
//!
//! 2 images, 16 planned files, 3 skipped
//! ```
//!
//! # Architecture
//!
//! Each surface has a `format_*` function (returns `String` or `Vec<String>`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::config::ImagesConfig;
use crate::convert::ConvertReport;
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Convert output
// ============================================================================

/// Format the per-file progress line emitted after each variant is written.
pub fn format_file_created(path: &Path) -> String {
    format!("Created: {}", path.display())
}

/// Print a per-file progress line to stdout.
pub fn print_file_created(path: &Path) {
    println!("{}", format_file_created(path));
}

/// Format the end-of-run summary line.
pub fn format_convert_summary(report: &ConvertReport) -> String {
    format!(
        "Image processing complete: {} images, {} files written",
        report.images, report.files
    )
}

/// Print the end-of-run summary to stdout.
pub fn print_convert_summary(report: &ConvertReport) {
    println!("{}", format_convert_summary(report));
}

// ============================================================================
// Check output
// ============================================================================

/// Format the `check` inventory: discovered images, mirrored directories,
/// the effective width/quality settings, and a totals line.
///
/// The planned file count assumes two encoded files (WebP + JPEG) per width.
pub fn format_check_output(manifest: &Manifest, images: &ImagesConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Images".to_string());
    for (i, image) in manifest.images.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), image.stem));
        lines.push(format!("    Source: {}", image.source_path));
    }

    if !manifest.directories.is_empty() {
        lines.push(String::new());
        lines.push("Directories".to_string());
        for dir in &manifest.directories {
            lines.push(format!("    {}/", dir));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    let widths: Vec<String> = images.widths.iter().map(u32::to_string).collect();
    lines.push(format!("    Widths: {}", widths.join(", ")));
    lines.push(format!("    Quality: {}", images.quality));

    lines.push(String::new());
    let planned = manifest.images.len() * images.widths.len() * 2;
    lines.push(format!(
        "{} images, {} planned files, {} skipped",
        manifest.images.len(),
        planned,
        manifest.skipped
    ));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(manifest: &Manifest, images: &ImagesConfig) {
    for line in format_check_output(manifest, images) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
