//! The visibility-reporting seam between loader rules and the environment.

/// Observation parameters, mirroring an intersection observer init.
///
/// The loader hands these to the observer when it attaches. The observation
/// root is always the viewport itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Margin around the viewport within which loading starts early, in px
    pub root_margin_px: u32,
    /// Fraction of the element that must be visible before it counts
    pub threshold: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin_px: 50,
            threshold: 0.0,
        }
    }
}

/// One visibility change reported by the environment, identifying an element
/// by its index in the page's element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub index: usize,
    pub is_intersecting: bool,
}

/// Registration interface the loader drives.
///
/// The environment owns the actual intersection machinery; the loader hands
/// it the observation parameters, then tells it which elements to watch and
/// when to stop. Swapping in a fake makes the loading rules testable without
/// a browser.
pub trait ViewportObserver {
    /// Apply the observation parameters, before any element is observed.
    fn configure(&mut self, options: ObserverOptions);
    fn observe(&mut self, index: usize);
    fn unobserve(&mut self, index: usize);
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Recording observer for loader tests.
    #[derive(Debug, Default)]
    pub struct FakeViewport {
        options: Option<ObserverOptions>,
        observed: Vec<usize>,
        unobserved: Vec<usize>,
    }

    impl FakeViewport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Options received through `configure`, if any.
        pub fn options(&self) -> Option<ObserverOptions> {
            self.options
        }

        /// Indices passed to `observe`, in call order.
        pub fn observed(&self) -> &[usize] {
            &self.observed
        }

        /// Indices passed to `unobserve`, in call order.
        pub fn unobserved(&self) -> &[usize] {
            &self.unobserved
        }

        /// True while an index has been observed and not yet unobserved.
        pub fn is_observing(&self, index: usize) -> bool {
            self.observed.contains(&index) && !self.unobserved.contains(&index)
        }
    }

    impl ViewportObserver for FakeViewport {
        fn configure(&mut self, options: ObserverOptions) {
            self.options = Some(options);
        }

        fn observe(&mut self, index: usize) {
            self.observed.push(index);
        }

        fn unobserve(&mut self, index: usize) {
            self.unobserved.push(index);
        }
    }

    // =========================================================================
    // FakeViewport self-tests
    // =========================================================================

    #[test]
    fn default_options_use_fifty_px_margin_and_zero_threshold() {
        let options = ObserverOptions::default();
        assert_eq!(options.root_margin_px, 50);
        assert_eq!(options.threshold, 0.0);
    }

    #[test]
    fn fake_tracks_observation_lifecycle() {
        let mut fake = FakeViewport::new();
        fake.observe(3);
        assert!(fake.is_observing(3));
        fake.unobserve(3);
        assert!(!fake.is_observing(3));
        assert_eq!(fake.observed(), &[3]);
        assert_eq!(fake.unobserved(), &[3]);
    }

    #[test]
    fn fake_records_configuration() {
        let mut fake = FakeViewport::new();
        assert_eq!(fake.options(), None);
        fake.configure(ObserverOptions::default());
        assert_eq!(fake.options(), Some(ObserverOptions::default()));
    }
}
