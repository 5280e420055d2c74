//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the converter
//! needs: identify (read source dimensions) and resize (resize and encode to
//! the output path). The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests substitute a mock
//! that records calls instead of touching pixels.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Both operations propagate codec and filesystem faults as-is; the backend
/// performs no retries and no cleanup of partial output.
pub trait ImageBackend {
    /// Get image dimensions without decoding the full image.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Resize the source to the given dimensions and encode it to the output
    /// path, with the encoder chosen by the output's extension.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::super::params::Quality;
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    ///
    /// Identify results are scripted up front (popped per call), and a resize
    /// failure can be armed against an output-path substring to exercise the
    /// fail-fast path of a batch run.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: Mutex<Vec<Dimensions>>,
        pub operations: Mutex<Vec<RecordedOp>>,
        pub fail_resize_matching: Mutex<Option<String>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Resize {
            source: String,
            output: String,
            width: u32,
            height: u32,
            quality: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripted dimensions, popped per identify call (last in, first out).
        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: Mutex::new(dims),
                operations: Mutex::new(Vec::new()),
                fail_resize_matching: Mutex::new(None),
            }
        }

        /// Arm a resize failure for any output path containing `needle`.
        pub fn fail_resize_when(self, needle: &str) -> Self {
            *self.fail_resize_matching.lock().unwrap() = Some(needle.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BackendError::ProcessingFailed("No mock dimensions".to_string()))
        }

        fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
            let output = params.output.to_string_lossy().to_string();
            if let Some(needle) = self.fail_resize_matching.lock().unwrap().as_deref() {
                if output.contains(needle) {
                    return Err(BackendError::ProcessingFailed(format!(
                        "mock failure for {output}"
                    )));
                }
            }
            self.operations.lock().unwrap().push(RecordedOp::Resize {
                source: params.source.to_string_lossy().to_string(),
                output,
                width: params.width,
                height: params.height,
                quality: params.quality.value(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_identify_errors_when_unscripted() {
        let backend = MockBackend::new();
        assert!(backend.identify(Path::new("/test/image.jpg")).is_err());
    }

    #[test]
    fn mock_records_resize() {
        let backend = MockBackend::new();

        backend
            .resize(&ResizeParams {
                source: "/source.jpg".into(),
                output: "/output-600.webp".into(),
                width: 600,
                height: 400,
                quality: Quality::new(80),
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Resize {
                width: 600,
                height: 400,
                quality: 80,
                ..
            }
        ));
    }

    #[test]
    fn mock_armed_failure_fires_on_matching_output() {
        let backend = MockBackend::new().fail_resize_when("bad");

        let ok = backend.resize(&ResizeParams {
            source: "/a.jpg".into(),
            output: "/out/good-300.webp".into(),
            width: 300,
            height: 200,
            quality: Quality::default(),
        });
        assert!(ok.is_ok());

        let err = backend.resize(&ResizeParams {
            source: "/a.jpg".into(),
            output: "/out/bad-300.webp".into(),
            width: 300,
            height: 200,
            quality: Quality::default(),
        });
        assert!(matches!(err, Err(BackendError::ProcessingFailed(_))));

        // Failed call is not recorded as a completed operation
        assert_eq!(backend.get_operations().len(), 1);
    }
}
