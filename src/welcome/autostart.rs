//! Startup flag for the welcome dialog
//!
//! The presence of `~/.linuxmint/mintwelcome/norun.flag` disables autostart;
//! its absence means the dialog shows on login.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const FLAG_DIR: &str = ".linuxmint/mintwelcome";
const FLAG_NAME: &str = "norun.flag";

fn flag_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("unable to determine home directory")?;
    Ok(home.join(FLAG_DIR).join(FLAG_NAME))
}

pub fn is_enabled() -> Result<bool> {
    Ok(!flag_path()?.exists())
}

pub fn set_enabled(enabled: bool) -> Result<()> {
    set_enabled_at(&flag_path()?, enabled)
}

fn set_enabled_at(flag: &Path, enabled: bool) -> Result<()> {
    if enabled {
        if flag.exists() {
            fs::remove_file(flag)
                .with_context(|| format!("removing startup flag at {}", flag.display()))?;
        }
    } else {
        if let Some(parent) = flag.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating flag directory at {}", parent.display()))?;
        }
        fs::write(flag, b"")
            .with_context(|| format!("writing startup flag to {}", flag.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabling_creates_the_flag_file() {
        let dir = tempfile::tempdir().unwrap();
        let flag = dir.path().join(FLAG_DIR).join(FLAG_NAME);

        set_enabled_at(&flag, false).unwrap();
        assert!(flag.exists());
    }

    #[test]
    fn enabling_removes_the_flag_file() {
        let dir = tempfile::tempdir().unwrap();
        let flag = dir.path().join(FLAG_DIR).join(FLAG_NAME);

        set_enabled_at(&flag, false).unwrap();
        set_enabled_at(&flag, true).unwrap();
        assert!(!flag.exists());
    }

    #[test]
    fn enabling_without_a_flag_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let flag = dir.path().join(FLAG_DIR).join(FLAG_NAME);

        set_enabled_at(&flag, true).unwrap();
        assert!(!flag.exists());
    }
}
