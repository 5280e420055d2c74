//! Centralized variant naming shared by the converter and the markup side.
//!
//! Every derived file follows the same pattern: `{basename}-{width}.{ext}`,
//! where `ext` is `webp` or `jpg`. The browser-facing `srcset` strings are
//! synthesized from the same template, so the files the converter writes and
//! the candidate URLs the markup advertises can never drift apart. This
//! module is the single place that template lives.
//!
//! ## Naming examples
//!
//! - `photo` + 600 + WebP → `photo-600.webp`
//! - `photo` + 600 + Jpeg → `photo-600.jpg`
//! - base `images/hero`, widths `[300, 600]` →
//!   `images/hero-300.webp 300w, images/hero-600.webp 600w`

/// Output encoding for a derived file. WebP is the primary format the
/// `srcset` advertises; JPEG is the fallback for clients without WebP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFormat {
    WebP,
    Jpeg,
}

impl VariantFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            VariantFormat::WebP => "webp",
            VariantFormat::Jpeg => "jpg",
        }
    }
}

/// File name for one derived variant: `{stem}-{width}.{ext}`.
///
/// Adds no path separators of its own; the converter passes a bare stem and
/// places the result in the mirrored directory, while [`srcset_value`] passes
/// a base that already carries its directory. Same template either way.
pub fn variant_file_name(stem: &str, width: u32, format: VariantFormat) -> String {
    format!("{}-{}.{}", stem, width, format.extension())
}

/// Strip the final extension from a source path, keeping directories.
///
/// Matches the markup convention: the extension is the part after the last
/// dot, provided it is non-empty and contains no `/`. Paths without one are
/// returned unchanged.
///
/// - `"images/hero.png"` → `"images/hero"`
/// - `"images/archive.old/hero"` → `"images/archive.old/hero"`
/// - `"hero"` → `"hero"`
pub fn base_path(src: &str) -> &str {
    match src.rfind('.') {
        Some(dot) if dot + 1 < src.len() && !src[dot + 1..].contains('/') => &src[..dot],
        _ => src,
    }
}

/// Synthesize a `srcset` attribute value for a base path: one WebP candidate
/// per breakpoint width, each annotated with its `{width}w` descriptor.
pub fn srcset_value(base: &str, widths: &[u32]) -> String {
    widths
        .iter()
        .map(|&width| {
            format!(
                "{} {}w",
                variant_file_name(base, width, VariantFormat::WebP),
                width
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Synthesize the fixed `sizes` attribute for a breakpoint set: pick the
/// viewport-matching breakpoint up to the largest width, else the largest.
///
/// For the default set this renders as
/// `(max-width: 300px) 300px, (max-width: 600px) 600px, (max-width: 900px) 900px, 1200px`.
pub fn sizes_attribute(widths: &[u32]) -> String {
    let mut clauses: Vec<String> = Vec::with_capacity(widths.len());
    for (index, &width) in widths.iter().enumerate() {
        if index + 1 == widths.len() {
            clauses.push(format!("{width}px"));
        } else {
            clauses.push(format!("(max-width: {width}px) {width}px"));
        }
    }
    clauses.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [u32; 4] = [300, 600, 900, 1200];

    #[test]
    fn webp_variant_name() {
        assert_eq!(
            variant_file_name("photo", 600, VariantFormat::WebP),
            "photo-600.webp"
        );
    }

    #[test]
    fn jpeg_variant_name() {
        assert_eq!(
            variant_file_name("photo", 1200, VariantFormat::Jpeg),
            "photo-1200.jpg"
        );
    }

    #[test]
    fn variant_name_has_no_path_separator() {
        let name = variant_file_name("photo", 300, VariantFormat::WebP);
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
    }

    #[test]
    fn base_path_strips_extension() {
        assert_eq!(base_path("images/hero.png"), "images/hero");
    }

    #[test]
    fn base_path_keeps_extensionless_input() {
        assert_eq!(base_path("images/hero"), "images/hero");
    }

    #[test]
    fn base_path_ignores_dot_in_directory() {
        assert_eq!(base_path("images.v2/hero"), "images.v2/hero");
    }

    #[test]
    fn base_path_strips_only_last_extension() {
        assert_eq!(base_path("backup.tar.gz"), "backup.tar");
    }

    #[test]
    fn base_path_keeps_trailing_dot() {
        assert_eq!(base_path("hero."), "hero.");
    }

    #[test]
    fn srcset_matches_converter_naming() {
        assert_eq!(
            srcset_value("images/hero", &WIDTHS),
            "images/hero-300.webp 300w, images/hero-600.webp 600w, \
             images/hero-900.webp 900w, images/hero-1200.webp 1200w"
        );
    }

    #[test]
    fn srcset_single_width() {
        assert_eq!(srcset_value("pic", &[600]), "pic-600.webp 600w");
    }

    #[test]
    fn sizes_attribute_four_clauses() {
        assert_eq!(
            sizes_attribute(&WIDTHS),
            "(max-width: 300px) 300px, (max-width: 600px) 600px, \
             (max-width: 900px) 900px, 1200px"
        );
    }

    #[test]
    fn sizes_attribute_single_width_is_bare() {
        assert_eq!(sizes_attribute(&[900]), "900px");
    }
}
