//! Site configuration as supplied by the host
//!
//! The host configures the plugin with a bare boolean (`estrenosgo: yes`).

use serde::{Deserialize, Serialize};

/// Enable flag for the site; disabled unless the host says otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteConfig {
    pub enabled: bool,
}

impl SiteConfig {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl From<bool> for SiteConfig {
    fn from(enabled: bool) -> Self {
        Self { enabled }
    }
}
