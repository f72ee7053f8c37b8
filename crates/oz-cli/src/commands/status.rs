//! Non-interactive save summary.

use std::path::Path;

use super::render;

pub fn run(dir: &Path) -> Result<(), String> {
    let session = super::open_session(dir, 0);
    println!("{}", render::service_record(&session));
    println!();
    println!("{}", render::ring_table(&session));
    Ok(())
}
