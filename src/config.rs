//! Application-level configuration constants.

// Polling
pub const POLL_INTERVAL_MS: u32 = 500;

// Counting service routes
pub const SET_EXERCISE_PATH: &str = "/set_exercise";
pub const GET_COUNTS_PATH: &str = "/get_counts";
pub const VIDEO_FEED_PATH: &str = "/video_feed";

/// Used when the page origin cannot be read (e.g. opaque `file://` origins).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

// Display binding
pub const COUNTER_ELEMENT_ID: &str = "counter";
pub const COUNT_PREFIX: &str = "Exercise Count: ";

/// Where the counting service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from `window.location.origin`.
    ///
    /// The counting service serves this page, so its origin is the service's origin.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .filter(|o| !o.is_empty() && o != "null");

        match origin {
            Some(origin) => Self::new(origin),
            None => {
                log::warn!("Page origin unavailable, using {}", DEFAULT_BASE_URL);
                Self::new(DEFAULT_BASE_URL)
            }
        }
    }

    /// Join the base URL with a route path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
