use crate::error::{Result as ServerErrorResult, ServerError};

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Counters for the outfit and catalog flows
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "wardrobe" }
    }

    /// `mode` is "random" or "ai"
    pub fn outfit_generated(&self, mode: &str) {
        counter!(format!("{}.outfits.generated", self.prefix)).increment(1);
        counter!(format!("{}.outfits.generated.{}", self.prefix, mode)).increment(1);
    }

    pub fn llm_failure(&self, kind: &str) {
        counter!(format!("{}.llm.failures", self.prefix)).increment(1);
        counter!(format!("{}.llm.failures.{}", self.prefix, kind)).increment(1);
    }

    pub fn item_ingested(&self, section: &str) {
        counter!(format!("{}.items.ingested", self.prefix)).increment(1);
        counter!(format!("{}.items.ingested.{}", self.prefix, section)).increment(1);
    }

    pub fn ingestion_failed(&self) {
        counter!(format!("{}.items.ingestion_failures", self.prefix)).increment(1);
    }

    /// `action` is "saved" or "removed"
    pub fn outfit_toggled(&self, action: &str) {
        counter!(format!("{}.outfits.toggled.{}", self.prefix, action)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs the global Prometheus recorder. Call once per process.
pub fn install_prometheus() -> ServerErrorResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })
}
