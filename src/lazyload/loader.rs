//! Loading rules: registration, intersection handling, responsive rewrite.

use super::element::ImageElement;
use super::observer::{IntersectionEntry, ObserverOptions, ViewportObserver};
use crate::naming;
use std::collections::BTreeSet;

/// Drives deferred loading for a page's image elements.
///
/// Elements are addressed by index into the slice the page presents; the
/// loader tracks which of them still await their first intersection, and
/// carries the observation parameters it hands the observer on attach.
#[derive(Debug, Default)]
pub struct LazyLoader {
    options: ObserverOptions,
    pending: BTreeSet<usize>,
}

impl LazyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with non-default observation parameters.
    pub fn with_options(options: ObserverOptions) -> Self {
        Self {
            options,
            pending: BTreeSet::new(),
        }
    }

    /// Register every element carrying a deferred source with the observer.
    ///
    /// The observer receives the loader's observation parameters first.
    /// Elements without a `data-src` are not registered, including responsive
    /// ones; those only participate in the eager rewrite pass.
    pub fn attach(&mut self, elements: &[ImageElement], observer: &mut impl ViewportObserver) {
        observer.configure(self.options);
        for (index, element) in elements.iter().enumerate() {
            if element.data_src().is_some() {
                self.pending.insert(index);
                observer.observe(index);
            }
        }
    }

    /// Handle a batch of visibility reports.
    ///
    /// An element loads on its first intersecting report and is unobserved
    /// immediately after. Later reports for the same index, reports with
    /// `is_intersecting` false, and indices that were never registered are
    /// all ignored.
    pub fn on_intersections(
        &mut self,
        entries: &[IntersectionEntry],
        elements: &mut [ImageElement],
        observer: &mut impl ViewportObserver,
    ) {
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if !self.pending.remove(&entry.index) {
                continue;
            }
            if let Some(element) = elements.get_mut(entry.index) {
                element.load();
            }
            observer.unobserve(entry.index);
        }
    }

    /// Rewrite every responsive element's `srcset`/`sizes` from the shared
    /// width ladder, eagerly at startup rather than on intersection.
    ///
    /// A responsive element without a `data-src` is skipped without comment.
    pub fn apply_responsive_markup(elements: &mut [ImageElement], widths: &[u32]) {
        for element in elements.iter_mut() {
            if !element.is_responsive() {
                continue;
            }
            let Some(data_src) = element.data_src() else {
                continue;
            };
            let srcset = naming::srcset_value(naming::base_path(data_src), widths);
            let sizes = naming::sizes_attribute(widths);
            element.set_responsive_source(srcset, sizes);
        }
    }

    /// Page-ready entry point: register lazy elements, then rewrite
    /// responsive ones.
    pub fn start(
        &mut self,
        elements: &mut [ImageElement],
        widths: &[u32],
        observer: &mut impl ViewportObserver,
    ) {
        self.attach(elements, observer);
        Self::apply_responsive_markup(elements, widths);
    }
}
