use std::{net::{IpAddr, Ipv4Addr, SocketAddr}, str::FromStr};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads `HOST` and `PORT`. Bad values are logged and replaced by defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: parse_or(&lookup, "HOST", defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️ Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_5000() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.addr(), "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8081")]));
        assert_eq!(cfg.addr(), "127.0.0.1:8081".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[("HOST", "localhost:80"), ("PORT", "http")]));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn delay_variable_is_not_configuration() {
        let cfg = Config::from_lookup(lookup(&[("STORY_DELAY_MS", "0")]));
        assert_eq!(cfg, Config::default());
    }
}
