//! Sandbox/live credential resolution.
//!
//! Both bundles are loaded once at startup and never mutated; which one is
//! active is a pure function of the configured selector string.

/// Credentials and base URL for one gateway environment.
#[derive(Debug, Clone)]
pub struct EnvironmentBundle {
    pub secret_key: String,
    pub public_key: String,
    pub base_url: String,
}

/// The two environment bundles plus the active-environment selector.
///
/// A selector equal to `"production"` (case-insensitive) picks the live
/// bundle; every other value picks sandbox. An unset active bundle is a
/// startup configuration error, not a call-time condition.
#[derive(Debug, Clone)]
pub struct PaystackEnvironments {
    sandbox: EnvironmentBundle,
    live: EnvironmentBundle,
    selector: String,
}

const LIVE_SELECTOR: &str = "production";

impl PaystackEnvironments {
    pub fn new(
        sandbox: EnvironmentBundle,
        live: EnvironmentBundle,
        selector: impl Into<String>,
    ) -> Self {
        Self {
            sandbox,
            live,
            selector: selector.into(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.selector.trim().eq_ignore_ascii_case(LIVE_SELECTOR)
    }

    pub fn active(&self) -> &EnvironmentBundle {
        if self.is_live() {
            &self.live
        } else {
            &self.sandbox
        }
    }

    /// The configured selector string, for introspection endpoints.
    pub fn active_name(&self) -> &str {
        &self.selector
    }
}
