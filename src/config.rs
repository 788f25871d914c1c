use std::net::{IpAddr, SocketAddr};
use clap::Parser;

pub const ANY_ORIGIN: &str = "*";

#[derive(Parser, Clone, Debug)]
#[command(name = "schedule-service", about = "Validates and shapes reservation requests")]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of allowed CORS origins, `*` allows any origin.
    #[clap(env, long, default_value = ANY_ORIGIN)]
    pub origin_urls: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.origin_urls.trim() == ANY_ORIGIN
    }

    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.origin_urls
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}
