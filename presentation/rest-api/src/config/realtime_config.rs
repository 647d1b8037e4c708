use std::env;

const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Settings for the realtime WebSocket channel
#[derive(Debug, Clone, PartialEq)]
pub struct RealtimeConfig {
    pub channel_capacity: usize,
}

impl RealtimeConfig {
    /// Environment variables:
    /// - REALTIME_CHANNEL_CAPACITY: Pending updates kept per slow client (default: 64)
    pub fn from_env() -> Self {
        Self::resolve(env::var("REALTIME_CHANNEL_CAPACITY").ok())
    }

    fn resolve(capacity: Option<String>) -> Self {
        let channel_capacity = capacity
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_CHANNEL_CAPACITY);

        Self { channel_capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_capacity_when_unset() {
        assert_eq!(RealtimeConfig::resolve(None).channel_capacity, 64);
    }

    #[test]
    fn should_parse_configured_capacity() {
        assert_eq!(
            RealtimeConfig::resolve(Some(" 16 ".to_string())).channel_capacity,
            16
        );
    }

    #[test]
    fn should_fall_back_when_capacity_invalid_or_zero() {
        assert_eq!(
            RealtimeConfig::resolve(Some("lots".to_string())).channel_capacity,
            64
        );
        assert_eq!(
            RealtimeConfig::resolve(Some("0".to_string())).channel_capacity,
            64
        );
    }
}
