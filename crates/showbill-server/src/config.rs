use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Listen address settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Reads `SHOWBILL_HOST` and `PORT`, falling back to the defaults when a
    /// value is missing or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = match lookup("SHOWBILL_HOST").map(|v| v.parse::<IpAddr>()) {
            Some(Ok(host)) => host,
            Some(Err(e)) => {
                tracing::warn!("ignoring invalid SHOWBILL_HOST: {e}");
                defaults.host
            }
            None => defaults.host,
        };
        let port = match lookup("PORT").map(|v| v.parse::<u16>()) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                tracing::warn!("ignoring invalid PORT: {e}");
                defaults.port
            }
            None => defaults.port,
        };
        Self { host, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
