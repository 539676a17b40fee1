use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ranking::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_IMAGES_URL: &str = "/assets";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Everything the dashboard server needs besides the rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding `{movie_id}.jpg` poster files
    pub assets_dir: PathBuf,
    /// URL prefix the posters are served under
    pub images_url: String,
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            images_url: DEFAULT_IMAGES_URL.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl DashboardConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Route prefix for the poster files, without a trailing slash
    pub fn images_route(&self) -> &str {
        self.images_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(DashboardError::InvalidConfig(
                "top_n must be at least 1".to_string(),
            ));
        }
        if !self.images_url.starts_with('/') || self.images_route().is_empty() {
            return Err(DashboardError::InvalidConfig(format!(
                "images_url must be an absolute path below '/', got {:?}",
                self.images_url
            )));
        }
        Ok(())
    }
}
