//! Fire-and-forget launching of URLs and helper applications

use anyhow::{Context, Result};
use std::process::Command;

/// Open a URL in the user's preferred browser without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
    Command::new("xdg-open")
        .arg(url)
        .spawn()
        .map(|_| ())
        .or_else(|_| {
            // Fallback to common browsers if xdg-open is unavailable
            Command::new("firefox").arg(url).spawn().map(|_| ())
        })
        .or_else(|_| Command::new("chromium").arg(url).spawn().map(|_| ()))
        .with_context(|| format!("opening {url}"))?;

    Ok(())
}

/// Launch a desktop application detached from this process.
pub fn spawn_app(program: &str) -> Result<()> {
    Command::new(program)
        .spawn()
        .with_context(|| format!("launching {program}"))?;
    Ok(())
}
