use leptos::prelude::{get_configuration, LeptosOptions};
use std::env;
use std::net::SocketAddr;
use tracing::info;

use crate::error::{Result, ServerError};

/// Overrides the listen address from `[package.metadata.leptos]`.
pub const SITE_ADDR_ENV: &str = "WXMP_SITE_ADDR";

/// Load Leptos options from cargo-leptos settings, applying `WXMP_SITE_ADDR` if set.
pub fn load_leptos_options() -> Result<LeptosOptions> {
    let conf = get_configuration(None).map_err(|e| ServerError::config(e.to_string()))?;
    let mut options = conf.leptos_options;

    if let Some(addr) = parse_site_addr(env::var(SITE_ADDR_ENV).ok().as_deref())? {
        info!("Listen address overridden by {}: {}", SITE_ADDR_ENV, addr);
        options.site_addr = addr;
    }

    Ok(options)
}

/// An empty or missing value means no override.
pub fn parse_site_addr(value: Option<&str>) -> Result<Option<SocketAddr>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| ServerError::config(format!("invalid {} `{}`: {}", SITE_ADDR_ENV, raw, e))),
    }
}
