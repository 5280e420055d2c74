//! HTML authoring helpers for the variant naming contract.
//!
//! The attribute values these helpers emit come from [`crate::naming`], so
//! generated markup, converted files, and the lazy-loader all agree on a
//! single name template. Two forms are provided:
//!
//! - [`render_lazy_img`]: a deferred `<img>` for the lazy-loader, with the
//!   real source behind `data-src`/`data-srcset`.
//! - [`render_eager_picture`]: a `<picture>` with a WebP `<source>` and a
//!   JPEG fallback `<img>` for contexts where no script runs.

use crate::naming::{self, VariantFormat};
use maud::{Markup, html};

/// Render the deferred `<img>` the lazy-loader consumes.
///
/// The element ships without a live `src`; the loader swaps `data-src` and
/// `data-srcset` into the real attributes on first intersection.
pub fn render_lazy_img(data_src: &str, widths: &[u32]) -> Markup {
    let base = naming::base_path(data_src);
    html! {
        img.lazy
            data-src=(data_src)
            data-srcset=(naming::srcset_value(base, widths))
            sizes=(naming::sizes_attribute(widths))
            alt="";
    }
}

/// Render an eager `<picture>` for no-script contexts.
///
/// The `<source>` carries the WebP ladder; the `<img>` falls back to the
/// middle width's JPEG variant.
pub fn render_eager_picture(data_src: &str, widths: &[u32]) -> Markup {
    let base = naming::base_path(data_src);
    let fallback = widths
        .get(widths.len() / 2)
        .map(|&w| naming::variant_file_name(base, w, VariantFormat::Jpeg))
        .unwrap_or_else(|| data_src.to_string());
    html! {
        picture {
            source
                type="image/webp"
                srcset=(naming::srcset_value(base, widths))
                sizes=(naming::sizes_attribute(widths));
            img src=(fallback) alt="";
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: &[u32] = &[300, 600, 900, 1200];

    #[test]
    fn lazy_img_defers_source() {
        let html = render_lazy_img("images/hero.jpg", WIDTHS).into_string();
        assert!(html.contains(r#"class="lazy""#));
        assert!(html.contains(r#"data-src="images/hero.jpg""#));
        // No live src until the loader runs
        assert!(!html.contains(r#" src=""#));
    }

    #[test]
    fn lazy_img_carries_webp_ladder_and_sizes() {
        let html = render_lazy_img("images/hero.jpg", WIDTHS).into_string();
        assert!(html.contains(
            r#"data-srcset="images/hero-300.webp 300w, images/hero-600.webp 600w, images/hero-900.webp 900w, images/hero-1200.webp 1200w""#
        ));
        assert!(html.contains(
            r#"sizes="(max-width: 300px) 300px, (max-width: 600px) 600px, (max-width: 900px) 900px, 1200px""#
        ));
    }

    #[test]
    fn eager_picture_has_webp_source_and_jpeg_fallback() {
        let html = render_eager_picture("images/hero.jpg", WIDTHS).into_string();
        assert!(html.contains(r#"<source type="image/webp""#));
        assert!(html.contains("images/hero-1200.webp 1200w"));
        assert!(html.contains(r#"src="images/hero-900.jpg""#));
    }

    #[test]
    fn eager_fallback_uses_middle_width() {
        let html = render_eager_picture("hero.jpg", &[300, 600]).into_string();
        assert!(html.contains(r#"src="hero-600.jpg""#));
    }

    #[test]
    fn only_the_final_extension_is_stripped() {
        let html = render_lazy_img("docs/photo.v2.png", WIDTHS).into_string();
        assert!(html.contains("docs/photo.v2-300.webp 300w"));
    }
}
