//! Web frontend configuration, used to build links into the browser pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WebConfig {
    /// Base URL of the static pages (e.g. `http://localhost:5500`).
    #[serde(default)]
    pub frontend_url: String,
}
