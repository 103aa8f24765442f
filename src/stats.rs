use lazy_static::lazy_static;
use metrics::{counter, gauge, Counter, Gauge};
use std::sync::atomic::{AtomicI64, Ordering};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub generator_creations: Counter,
    pub generator_deletions: Counter,

    // Live generators. Tracked in an atomic and published with `set`, as statsd-style
    // exporters can't increment a gauge.
    total_generators_count: AtomicI64,
    total_generators: Gauge,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            generator_creations: counter!("generator.creations"),
            generator_deletions: counter!("generator.deletions"),
            total_generators_count: AtomicI64::new(0),
            total_generators: gauge!("generator.total_count"),
        }
    }

    pub fn increment_total_generators(&self) {
        self.update_total_generators(1);
    }

    pub fn decrement_total_generators(&self) {
        self.update_total_generators(-1);
    }

    fn update_total_generators(&self, delta: i64) {
        let prev_value = self.total_generators_count.fetch_add(delta, Ordering::SeqCst);
        self.total_generators.set((prev_value + delta) as f64);
    }
}
