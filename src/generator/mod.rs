use crate::check_digit::{LocomotiveNumberChecksum, Validator};
use crate::config::GeneratorConfig;
use crate::report::{CheckDigitReport, VerificationReport};
use crate::serial_number::SerialNumber;
use crate::stats::GLOBAL_STATS;
use rayon::prelude::*;

use self::metrics::GeneratorMetrics;

pub mod metrics;


/// Produces check digit reports for raw user input, recording metrics along the way.
///
/// The generator itself holds no mutable state, so a single instance can be shared between
/// threads.
pub struct CheckDigitGenerator {
    config: GeneratorConfig,
    metrics: GeneratorMetrics,
}

impl CheckDigitGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let metrics = GeneratorMetrics::new(&config.labels);

        {
            let stats = &*GLOBAL_STATS;
            stats.generator_creations.increment(1);
            stats.increment_total_generators();
        }

        Self { config, metrics }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self, input: &str) -> CheckDigitReport {
        let result = SerialNumber::new(input);
        match &result {
            Ok(_) => self.metrics.generated.increment(1),
            Err(err) => {
                tracing::debug!(input, reason = err.reason(), "rejected serial number: {err}");
                self.metrics.record_rejection(err);
            }
        }
        CheckDigitReport::new(input, result)
    }

    /// Generates a report for every input. Reports are returned in input order, even when
    /// the work is spread over multiple threads.
    pub fn generate_all<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<CheckDigitReport> {
        if self.config.parallel {
            inputs
                .par_iter()
                .map(|input| self.generate(input.as_ref()))
                .collect()
        } else {
            inputs
                .iter()
                .map(|input| self.generate(input.as_ref()))
                .collect()
        }
    }

    pub fn verify(&self, input: &str) -> VerificationReport {
        let valid = LocomotiveNumberChecksum.is_valid_match(input);
        if !valid {
            tracing::debug!(input, "locomotive number failed verification");
        }
        self.metrics.record_verification(valid);
        VerificationReport {
            input: input.to_owned(),
            valid,
        }
    }

    pub fn verify_all<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<VerificationReport> {
        if self.config.parallel {
            inputs
                .par_iter()
                .map(|input| self.verify(input.as_ref()))
                .collect()
        } else {
            inputs
                .iter()
                .map(|input| self.verify(input.as_ref()))
                .collect()
        }
    }
}

impl Default for CheckDigitGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Drop for CheckDigitGenerator {
    fn drop(&mut self) {
        let stats = &*GLOBAL_STATS;
        stats.generator_deletions.increment(1);
        stats.decrement_total_generators();
    }
}
