//! Variant planning and dimension math.
//!
//! Pure functions that decide *what* the converter should produce for one
//! source image: which widths, which formats, which file names, in which
//! order. Execution (and therefore I/O) stays with the caller and the
//! backend, so the whole plan is testable without touching pixels.

use super::backend::Dimensions;
use super::params::Quality;
use crate::naming::{self, VariantFormat};

/// Scale original dimensions to a target width, preserving aspect ratio.
///
/// The width is taken exactly, upscaling smaller sources rather than
/// capping; the height is rounded and never drops below 1 pixel.
///
/// # Examples
/// ```
/// # use imageset::imaging::{scale_to_width, Dimensions};
/// let original = Dimensions { width: 2000, height: 1500 };
/// assert_eq!(scale_to_width(original, 600), (600, 450));
/// ```
pub fn scale_to_width(original: Dimensions, width: u32) -> (u32, u32) {
    let ratio = width as f64 / original.width as f64;
    let height = (original.height as f64 * ratio).round().max(1.0) as u32;
    (width, height)
}

/// Configuration for variant generation, derived from the pipeline config.
#[derive(Debug, Clone)]
pub struct VariantConfig {
    /// Breakpoint widths, ascending.
    pub widths: Vec<u32>,
    pub quality: Quality,
}

/// One planned output file for a source image.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedVariant {
    pub width: u32,
    pub height: u32,
    pub format: VariantFormat,
    /// File name only; directory placement is the caller's concern.
    pub file_name: String,
}

/// Plan every output file for one source image.
///
/// Order is part of the contract: all WebP variants in ascending width
/// order, then all JPEG variants in ascending width order. The file names
/// come from the shared naming template, so they are exactly what the
/// markup side's `srcset` advertises.
pub fn plan_variants(
    stem: &str,
    original: Dimensions,
    config: &VariantConfig,
) -> Vec<PlannedVariant> {
    let mut variants = Vec::with_capacity(config.widths.len() * 2);
    for format in [VariantFormat::WebP, VariantFormat::Jpeg] {
        for &target in &config.widths {
            let (width, height) = scale_to_width(original, target);
            variants.push(PlannedVariant {
                width,
                height,
                format,
                file_name: naming::variant_file_name(stem, width, format),
            });
        }
    }
    variants
}
