//! Model resolution metrics
//!
//! Counters are no-ops until the embedding application installs a recorder.

use std::time::Duration;

use metrics::{counter, histogram};

use crate::domain::{DomainError, ModelType};

/// Record a cache hit for a model lookup
pub fn record_cache_hit(model_type: ModelType) {
    counter!("model_cache_hits_total", "model_type" => model_type.as_str()).increment(1);
}

/// Record a cache miss for a model lookup
///
/// The type is not known until the record is fetched, so misses are unlabelled.
pub fn record_cache_miss() {
    counter!("model_cache_misses_total").increment(1);
}

/// Record a model client construction
pub fn record_construction(model_type: ModelType, provider: &str, duration: Duration) {
    let labels = [
        ("model_type", model_type.as_str().to_string()),
        ("provider", provider.to_string()),
    ];

    counter!("model_constructions_total", &labels).increment(1);
    histogram!("model_construction_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Record a failed model resolution
pub fn record_resolution_error(error: &DomainError) {
    counter!("model_resolution_errors_total", "kind" => error.kind()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use metrics::{
        Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    };

    /// Keeps the keys of registered counters
    #[derive(Default)]
    struct KeyRecorder {
        counters: Mutex<Vec<Key>>,
    }

    impl Recorder for KeyRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            self.counters.lock().unwrap().push(key.clone());
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_cache_hit(ModelType::Embedding);
        record_cache_miss();
        record_construction(ModelType::Language, "openai", Duration::from_millis(3));
        record_resolution_error(&DomainError::not_found("m1"));
    }

    #[test]
    fn test_cache_counters_use_bounded_labels() {
        let recorder = KeyRecorder::default();

        metrics::with_local_recorder(&recorder, || {
            record_cache_hit(ModelType::Language);
            record_cache_miss();
        });

        let counters = recorder.counters.lock().unwrap();
        assert_eq!(counters.len(), 2);

        let hit = &counters[0];
        assert_eq!(hit.name(), "model_cache_hits_total");
        let labels: Vec<_> = hit.labels().map(|l| (l.key(), l.value())).collect();
        assert_eq!(labels, vec![("model_type", "language")]);

        let miss = &counters[1];
        assert_eq!(miss.name(), "model_cache_misses_total");
        assert_eq!(miss.labels().count(), 0);
    }
}
