use gradebook_core::PageLimits;

use crate::env_util::parse_or;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: i64,
    pub max_limit: i64,
}

impl PaginationConfig {
    pub fn from_env() -> Self {
        let defaults = PageLimits::default();
        Self::new(
            parse_or("PAGINATION_DEFAULT_LIMIT", defaults.default_limit),
            parse_or("PAGINATION_MAX_LIMIT", defaults.max_limit),
        )
    }

    /// Non-positive values fall back to the built-in defaults and the default
    /// never exceeds the maximum.
    pub fn new(default_limit: i64, max_limit: i64) -> Self {
        let defaults = PageLimits::default();
        let max_limit = if max_limit > 0 { max_limit } else { defaults.max_limit };
        let default_limit = if default_limit > 0 {
            default_limit
        } else {
            defaults.default_limit
        };

        Self {
            default_limit: default_limit.min(max_limit),
            max_limit,
        }
    }

    pub fn limits(&self) -> PageLimits {
        PageLimits {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        let defaults = PageLimits::default();
        Self::new(defaults.default_limit, defaults.max_limit)
    }
}
