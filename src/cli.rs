use clap::Parser;
use color_eyre::eyre::{eyre, Result};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_NUMBER"));

#[derive(Parser, Debug)]
#[command(name = "dri", version = VERSION, about = "Drone CI Repository Inspector TUI")]
pub struct Cli {
    /// Drone server URL, e.g. https://drone.example.com
    #[arg(short, long, env = "DRONE_SERVER")]
    pub server: String,

    /// Personal API token
    #[arg(short, long, env = "DRONE_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Write debug logs to $XDG_STATE_HOME/dri/debug.log
    #[arg(long)]
    pub verbose: bool,
}

/// Checks the scheme and strips trailing slashes.
pub fn validate_server_url(raw: &str) -> Result<String> {
    let url = raw.trim();
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| eyre!("Server URL must start with http:// or https:// (got {raw:?})"))?;
    if host.trim_end_matches('/').is_empty() {
        return Err(eyre!("Server URL has no host (got {raw:?})"));
    }
    Ok(url.trim_end_matches('/').to_string())
}
