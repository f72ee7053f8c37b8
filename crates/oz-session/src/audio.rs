//! The audio collaborator seam.
//!
//! The session owns an injected [`AudioDirector`] and drives it with
//! discrete cues and continuous directives; audio never reports anything
//! back. Hosts without sound pass [`NullAudio`].

/// A discrete sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Generic interaction click.
    Click,
    /// Success sting (trial passed, upgrade bought, boss down).
    Success,
    /// Mote capture chime.
    MoteCatch,
    /// Domain scan start.
    ScanStart,
}

/// Receives sound directives from the session.
pub trait AudioDirector {
    /// Play a one-shot cue.
    fn cue(&mut self, cue: AudioCue);

    /// Set the ambient intensity scalar (0.2-2.0).
    fn set_intensity(&mut self, intensity: f64);

    /// Switch the ambient track for the given biome.
    fn start_biome_ambient(&mut self, biome: &str);
}

/// A director that ignores everything.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioDirector for NullAudio {
    fn cue(&mut self, _cue: AudioCue) {}
    fn set_intensity(&mut self, _intensity: f64) {}
    fn start_biome_ambient(&mut self, _biome: &str) {}
}
