//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use client::net::api::DEFAULT_API_BASE_URL;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// REST API the browser app talks to; no trailing slash.
    pub api_base_url: String,
    /// Directory served for paths no route matches.
    pub static_dir: Option<PathBuf>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PRESS_API_BASE_URL`: default `https://orange-press-be.vercel.app`
    /// - `PRESS_STATIC_DIR`: no static fallback when absent
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let api_base_url = parse_api_base_url(lookup("PRESS_API_BASE_URL").as_deref())?;
        let static_dir = lookup("PRESS_STATIC_DIR")
            .map(|dir| dir.trim().to_owned())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        Ok(Self { port, api_base_url, static_dir })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|e| HostError::Config { var: "PORT", reason: format!("{value:?}: {e}") }),
    }
}

fn parse_api_base_url(raw: Option<&str>) -> Result<String, HostError> {
    let Some(value) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(HostError::Config {
            var: "PRESS_API_BASE_URL",
            reason: format!("{value:?} must start with http:// or https://"),
        });
    }
    Ok(value.trim_end_matches('/').to_owned())
}
