// Build-time settings. Trunk passes env through to rustc, so
// `ACTIVITY_BOARD_API_BASE=https://api.example.org trunk build` points the
// board at another origin; unset means same origin.

pub const NOTICE_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub notice_ttl_ms: u32,
}

impl Config {
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("ACTIVITY_BOARD_API_BASE").unwrap_or(""))
    }

    pub fn with_base(base: &str) -> Self {
        Self {
            api_base: base.trim().trim_end_matches('/').to_string(),
            notice_ttl_ms: NOTICE_TTL_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_normalized() {
        assert_eq!(Config::with_base(" https://x.test/ ").api_base, "https://x.test");
        assert_eq!(Config::default().api_base, "");
        assert_eq!(Config::default().notice_ttl_ms, 5_000);
    }
}
