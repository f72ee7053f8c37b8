//! Non-interactive codex browsing.

use std::path::Path;

use super::render;

pub fn run(dir: &Path, tab: &str) -> Result<(), String> {
    let session = super::open_session(dir, 0);
    let rendered = render::codex_tab(&session, tab)?;
    println!("{rendered}");
    Ok(())
}
