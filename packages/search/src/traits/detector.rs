//! Best-effort breed detection seam.
//!
//! Breed names are open vocabulary, so the extractor delegates to a
//! capability-checked collaborator instead of a fixed table. The default
//! implementation detects nothing; extraction proceeds normally with an
//! absent breed whenever no real detector is configured or a detector
//! declines to guess.

/// A proper-noun spotter used to guess a breed name from raw query text.
///
/// Implementations receive the query with original casing and may return a
/// substring of it. Guesses are heuristic, not reliable: callers must treat
/// the result as a hint and never fail when it is `None`.
pub trait BreedDetector: Send + Sync {
    /// Return a breed guess, or `None` when nothing stands out.
    ///
    /// Must not panic on arbitrary input; degraded detection means `None`.
    fn detect(&self, query: &str) -> Option<String>;
}

/// Detector that never guesses. Used when breed detection is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBreedDetector;

impl NoopBreedDetector {
    pub fn new() -> Self {
        Self
    }
}

impl BreedDetector for NoopBreedDetector {
    fn detect(&self, _query: &str) -> Option<String> {
        None
    }
}
