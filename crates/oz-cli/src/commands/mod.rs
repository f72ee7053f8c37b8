pub mod codex;
pub mod play;
pub mod render;
pub mod status;

use std::path::Path;

use oz_session::{FileStore, GameSession, LocalEchoes, NullAudio, SessionConfig};

/// Open a session against the save in `dir`.
fn open_session(dir: &Path, seed: u64) -> GameSession {
    GameSession::new(
        SessionConfig::default().with_seed(seed),
        Box::new(FileStore::new(dir)),
        Box::new(LocalEchoes::new(seed.wrapping_add(1))),
        Box::new(NullAudio),
    )
}
