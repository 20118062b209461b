//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The state is read-only during request handling, so handlers never
//! need to coordinate with each other.

use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Prometheus renderer, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the Prometheus renderer, if installed
    #[inline]
    pub fn metrics(&self) -> Option<&PrometheusHandle> {
        self.metrics.as_ref()
    }
}
