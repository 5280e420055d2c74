//! Deferred image loading driven by viewport visibility.
//!
//! A DOM-free model of the browser-side loading behavior that pairs with the
//! converted variant trees. [`ImageElement`] holds the attribute state of an
//! `<img>` tag, [`ViewportObserver`] abstracts the environment's visibility
//! reporting, and [`LazyLoader`] owns the loading rules:
//!
//! - Elements with a `data-src` are registered with the observer and get
//!   their real `src` (plus `srcset`, when a `data-srcset` is present) on
//!   first intersection, together with a `loaded` class for CSS transitions.
//!   Each element fires once and is then unobserved.
//! - Elements marked responsive get live `srcset`/`sizes` attributes
//!   rewritten eagerly at startup from the shared width ladder in
//!   [`crate::naming`], independent of visibility.
//!
//! The observer seam keeps the rules testable without a browser: tests drive
//! them with a recording fake the same way imaging tests use a mock backend.

pub mod element;
pub mod loader;
pub mod observer;

pub use element::{ImageElement, LOADED_CLASS};
pub use loader::LazyLoader;
pub use observer::{IntersectionEntry, ObserverOptions, ViewportObserver};
