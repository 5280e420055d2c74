//! # Imageset
//!
//! A batch image converter for responsive web delivery, with a matching
//! model of the browser-side lazy loading that consumes its output. Point
//! it at a directory tree and every JPEG and PNG becomes a ladder of WebP
//! and JPEG width variants in a mirrored output tree.
//!
//! # Architecture: One Contract, Three Surfaces
//!
//! ```text
//! 1. Scan     assets/images/   →  Manifest         (filesystem → structured data)
//! 2. Convert  Manifest         →  processed/       (WebP + JPEG width variants)
//! 3. Deliver  naming contract  →  markup + loader  (srcset/sizes matching the files)
//! ```
//!
//! Everything hangs off the naming contract in [`naming`]: variant files are
//! `{stem}-{width}.{ext}` over a single width ladder. The converter writes
//! files with those names, the markup helpers emit `srcset` attributes with
//! those names, and the lazy-loader rewrites responsive elements with those
//! names. Changing the ladder in the config changes all three together.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the source tree, collects candidate images and directories |
//! | [`convert`] | Stage 2 — renders every manifest image into its WebP/JPEG width variants |
//! | [`imaging`] | Identify/resize/encode operations behind the [`imaging::ImageBackend`] seam |
//! | [`lazyload`] | DOM-free model of viewport-driven deferred image loading |
//! | [`markup`] | Maud helpers emitting the `<img>`/`<picture>` forms the loader consumes |
//! | [`naming`] | The shared variant-name and srcset/sizes contract |
//! | [`config`] | `imageset.toml` loading and validation (width ladder, quality) |
//! | [`output`] | CLI output formatting — pure `format_*` functions, thin `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Two Formats, Not One
//!
//! Every image is encoded to both WebP and JPEG at every width. WebP has had
//! [full browser support since 2020](https://caniuse.com/webp) and wins on
//! file size; the JPEG twins exist for mail clients, share sheets, and other
//! embedders that still reject WebP. `<picture>` negotiation picks the right
//! one at request time, so the cost is disk space, not bandwidth.
//!
//! ## Exact-Width Variants
//!
//! Variants are resized to the exact target width with Lanczos3 resampling,
//! not fit-within-a-box. The file name carries the width (`hero-600.webp`),
//! and a `srcset` that promises `600w` must deliver exactly 600 pixels;
//! rounding through an aspect-ratio box can come up one short. Heights
//! follow the source aspect ratio, rounded to the nearest pixel.
//!
//! ## Lossy WebP via libwebp
//!
//! The `image` crate decodes everything and encodes the JPEG variants, but
//! its WebP encoder is lossless-only. WebP variants go through the `webp`
//! crate (libwebp bindings) to get the quality-parameterized lossy mode this
//! pipeline exists for.
//!
//! ## Fail-Fast Conversion
//!
//! A run stops at the first error instead of collecting per-file failures.
//! Runs are idempotent (same names, overwritten in place), so the recovery
//! story is: fix the bad file, rerun. Partial output is never dangerous,
//! just incomplete.
//!
//! ## An Observer Seam Instead of a Browser
//!
//! The lazy-loading rules live in [`lazyload`] behind the
//! [`lazyload::ViewportObserver`] trait. The environment owns intersection
//! detection; the loader owns what happens on intersection (attribute swap,
//! `loaded` class, one-shot unobserve). Tests drive the rules with a
//! recording fake through the same seam, the way [`imaging`] tests use a
//! mock backend.

pub mod config;
pub mod convert;
pub mod imaging;
pub mod lazyload;
pub mod markup;
pub mod naming;
pub mod output;
pub mod scan;
