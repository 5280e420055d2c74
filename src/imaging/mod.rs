//! Image processing — decode, scale, encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Decode** | `image` (JPEG + PNG) |
//! | **Resize** | `resize_exact` + Lanczos3 |
//! | **Encode WebP** | `webp` crate (libwebp, lossy) |
//! | **Encode JPEG** | `image` `JpegEncoder` |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Pure planning functions (dimension math, variant lists)

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{PlannedVariant, VariantConfig, plan_variants, scale_to_width};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
