//! Sink registry keyed by severity bucket
//!
//! Sinks live in one arena; each bucket holds the arena indices registered
//! under it, in registration order. Registration needs `&mut self`, so it can
//! only happen while the registry is being set up. Once handed to a
//! dispatcher the registry is read-only and lookups take no lock.

use crate::level::Severity;
use crate::sink::Sink;

#[derive(Debug, Default)]
pub struct Registry {
    sinks: Vec<Sink>,
    buckets: [Vec<usize>; Severity::COUNT],
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `sink` to the `bucket` list
    ///
    /// No deduplication is done; registering the same target twice makes it
    /// receive lines twice.
    pub fn register(&mut self, bucket: Severity, sink: Sink) {
        let index = self.sinks.len();
        self.sinks.push(sink);
        self.buckets[bucket.rank()].push(index);
    }

    /// Register a sink under its own minimum level
    pub fn add(&mut self, sink: Sink) {
        self.register(sink.min_level(), sink);
    }

    /// Builder-style registration
    pub fn with_sink(mut self, bucket: Severity, sink: Sink) -> Self {
        self.register(bucket, sink);
        self
    }

    /// Sinks that receive a line logged at `severity`
    ///
    /// Buckets are scanned from `severity` towards `Debug`, yielding every sink
    /// registered in them in registration order; a sink is kept only when its
    /// ceiling admits the severity (`max_level.rank() <= severity.rank()`).
    pub fn matching_sinks(&self, severity: Severity) -> impl Iterator<Item = &Sink> + '_ {
        severity
            .and_below()
            .flat_map(move |bucket| self.buckets[bucket.rank()].iter())
            .map(move |&index| &self.sinks[index])
            .filter(move |sink| sink.admits(severity))
    }

    /// Sinks registered directly under `bucket`
    pub fn bucket(&self, bucket: Severity) -> impl Iterator<Item = &Sink> + '_ {
        self.buckets[bucket.rank()].iter().map(move |&index| &self.sinks[index])
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemoryWriter;

    fn sink(min: Severity, max: Severity) -> Sink {
        Sink::stream(min, max, MemoryWriter::new(), false)
    }

    fn bands(registry: &Registry, severity: Severity) -> Vec<(Severity, Severity)> {
        registry
            .matching_sinks(severity)
            .map(|s| (s.min_level(), s.max_level()))
            .collect()
    }

    #[test]
    fn test_bucket_and_ceiling() {
        let mut registry = Registry::new();
        registry.register(Severity::Info, sink(Severity::Info, Severity::Severe));

        for level in [Severity::Severe, Severity::Warning, Severity::Info] {
            assert_eq!(bands(&registry, level).len(), 1, "{} should match", level);
        }
        for level in [Severity::Fatal, Severity::Debug] {
            assert!(bands(&registry, level).is_empty(), "{} should not match", level);
        }
    }

    #[test]
    fn test_inverted_band_matches_nothing() {
        // Bucket WARNING is only scanned for WARNING and more severe lines,
        // which the INFO ceiling then rejects.
        let mut registry = Registry::new();
        registry.register(Severity::Warning, sink(Severity::Warning, Severity::Info));
        for level in Severity::ALL {
            assert!(bands(&registry, level).is_empty(), "{} should not match", level);
        }
    }

    #[test]
    fn test_scan_starts_at_severity() {
        // A sink in a bucket more severe than the message is never scanned.
        let mut registry = Registry::new();
        registry.register(Severity::Fatal, sink(Severity::Fatal, Severity::Fatal));
        assert!(bands(&registry, Severity::Severe).is_empty());
        assert_eq!(bands(&registry, Severity::Fatal).len(), 1);
    }

    #[test]
    fn test_bucket_then_registration_order() {
        let registry = Registry::new()
            .with_sink(Severity::Debug, sink(Severity::Debug, Severity::Fatal))
            .with_sink(Severity::Info, sink(Severity::Info, Severity::Fatal))
            .with_sink(Severity::Info, sink(Severity::Info, Severity::Severe))
            .with_sink(Severity::Warning, sink(Severity::Warning, Severity::Fatal));

        assert_eq!(
            bands(&registry, Severity::Warning),
            vec![
                (Severity::Warning, Severity::Fatal),
                (Severity::Info, Severity::Fatal),
                (Severity::Info, Severity::Severe),
                (Severity::Debug, Severity::Fatal),
            ]
        );
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.bucket(Severity::Info).count(), 2);
    }

    #[test]
    fn test_bucket_need_not_match_min_level() {
        let mut registry = Registry::new();
        registry.register(Severity::Debug, sink(Severity::Fatal, Severity::Fatal));
        assert_eq!(bands(&registry, Severity::Debug).len(), 1);
        assert_eq!(bands(&registry, Severity::Fatal).len(), 1);
    }

    #[test]
    fn test_add_uses_min_level() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.add(sink(Severity::Severe, Severity::Fatal));
        assert_eq!(registry.bucket(Severity::Severe).count(), 1);
        assert_eq!(bands(&registry, Severity::Severe).len(), 1);
        assert_eq!(bands(&registry, Severity::Fatal).len(), 1);
        assert!(bands(&registry, Severity::Warning).is_empty());
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = Registry::new();
        registry.register(Severity::Info, sink(Severity::Info, Severity::Fatal));
        registry.register(Severity::Debug, sink(Severity::Info, Severity::Fatal));
        assert_eq!(bands(&registry, Severity::Info).len(), 2);
        assert_eq!(bands(&registry, Severity::Debug).len(), 1);
    }
}
