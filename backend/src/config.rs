use tracing::warn;

pub const MAX_SUBMISSIONS_KEY: &str = "CONTACT_MAX_SUBMISSIONS";
pub const WINDOW_MINUTES_KEY: &str = "CONTACT_WINDOW_MINUTES";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub max_submissions: u32,
    pub window_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_submissions: 5,
            window_minutes: 15,
        }
    }
}

impl ServerConfig {
    pub fn new(max_submissions: u32, window_minutes: i64) -> Self {
        Self { max_submissions, window_minutes }
    }

    /// Reads overrides through `lookup` (the deployment's secret store), keeping defaults for missing or bad values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_submissions: parse_or(lookup(MAX_SUBMISSIONS_KEY), MAX_SUBMISSIONS_KEY, defaults.max_submissions),
            window_minutes: parse_or(lookup(WINDOW_MINUTES_KEY), WINDOW_MINUTES_KEY, defaults.window_minutes),
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(raw: Option<String>, key: &str, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {} value {:?}, using {}", key, value, default);
            default
        }),
        None => default,
    }
}
