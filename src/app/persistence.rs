//! Best-effort persistence of the session link, the terminal analogue of the
//! browser address bar: the file always holds exactly the latest link, so a
//! relaunch reproduces the sheet. I/O failures never interrupt interaction.

use std::path::{Path, PathBuf};

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("halfsheet");
        path
    })
}

pub fn keys_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("keys.toml"))
}

pub fn session_link_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("session.link"))
}

pub fn load_session_link() -> Option<String> {
    load_session_link_from(&session_link_path()?)
}

/// Replace the stored session link with `link`. Replacement, not append:
/// there is no history to walk, only the current location.
pub fn save_session_link(link: &str) {
    if let Some(path) = session_link_path() {
        save_session_link_to(&path, link);
    }
}

pub fn load_session_link_from(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let link = content.trim();
    if link.is_empty() {
        None
    } else {
        Some(link.to_string())
    }
}

pub fn save_session_link_to(path: &Path, link: &str) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(path, link);
}
