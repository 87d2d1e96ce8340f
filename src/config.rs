//! Engine configuration.

/// Number of workers used by the progress-reporting sum.
///
/// The blocking sum and the filters take a caller-supplied worker count; the
/// streaming variant does not, so it falls back to this value unless the
/// service was built with a custom [`EngineConfig`].
pub const DEFAULT_PROGRESS_WORKERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    progress_workers: usize,
}

impl EngineConfig {
    /// Creates a configuration. A worker count of 0 is treated as 1.
    pub fn new(progress_workers: usize) -> Self {
        Self {
            progress_workers: progress_workers.max(1),
        }
    }

    pub fn progress_workers(&self) -> usize {
        self.progress_workers
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_WORKERS)
    }
}
