//! Attribute state of a single image element.

use std::collections::BTreeSet;

/// Class added to an element once its real source has been applied.
pub const LOADED_CLASS: &str = "loaded";

/// A DOM-free stand-in for an `<img>` tag, carrying only the attributes the
/// loading rules read and write.
///
/// `data_src`, `data_srcset`, and the responsive marker describe intent and
/// never change after construction. `src`, `srcset`, `sizes`, and the class
/// list are the live state the loader mutates.
#[derive(Debug, Clone, Default)]
pub struct ImageElement {
    data_src: Option<String>,
    data_srcset: Option<String>,
    responsive: bool,
    src: Option<String>,
    srcset: Option<String>,
    sizes: Option<String>,
    classes: BTreeSet<String>,
}

impl ImageElement {
    /// An element whose real source is deferred behind `data-src`.
    pub fn lazy(data_src: &str) -> Self {
        Self {
            data_src: Some(data_src.to_string()),
            ..Self::default()
        }
    }

    /// Attach a deferred `srcset`, applied together with `src` at load time.
    pub fn with_data_srcset(mut self, data_srcset: &str) -> Self {
        self.data_srcset = Some(data_srcset.to_string());
        self
    }

    /// Mark the element for the eager responsive rewrite pass.
    pub fn responsive(mut self) -> Self {
        self.responsive = true;
        self
    }

    pub fn data_src(&self) -> Option<&str> {
        self.data_src.as_deref()
    }

    pub fn data_srcset(&self) -> Option<&str> {
        self.data_srcset.as_deref()
    }

    pub fn is_responsive(&self) -> bool {
        self.responsive
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn srcset(&self) -> Option<&str> {
        self.srcset.as_deref()
    }

    pub fn sizes(&self) -> Option<&str> {
        self.sizes.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Apply the deferred source. Called once, on first intersection.
    ///
    /// `srcset` is only touched when a deferred `data-srcset` exists, so a
    /// value written by the responsive pass survives loading.
    pub(crate) fn load(&mut self) {
        if let Some(data_src) = &self.data_src {
            self.src = Some(data_src.clone());
        }
        if let Some(data_srcset) = &self.data_srcset {
            self.srcset = Some(data_srcset.clone());
        }
        self.classes.insert(LOADED_CLASS.to_string());
    }

    /// Overwrite the live `srcset` and `sizes` attributes.
    pub(crate) fn set_responsive_source(&mut self, srcset: String, sizes: String) {
        self.srcset = Some(srcset);
        self.sizes = Some(sizes);
    }
}
