//! The progression state machine.
//!
//! [`GameSession`] is the only writer of the persisted [`GameProgress`]; it
//! owns the catalog, the seeded rng, the injected collaborators, and the
//! ephemeral encounter state (active trial, boss battle, scan countdown,
//! reward popups). State writes happen synchronously in response to discrete
//! player actions or encounter completion, and the full snapshot is saved
//! after every mutation.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use oz_battle::{BattleConfig, BattleEvent, BossBattle};
use oz_core::{
    Ally, Artefact, Catalog, Creature, Faction, GameProgress, GameState, NarrativeArc, Quest,
    RibbonMode, TemporalLaw, UpgradeKind, World, WorldStatus, economy,
};
use oz_trials::{Trial, TrialKind, TrialOutcome, effective_order};

use crate::audio::{AudioCue, AudioDirector};
use crate::diagnostics::DiagnosticsLog;
use crate::echo::{EchoError, EchoSource, fallback_line};
use crate::effects::{PopupTray, RewardPopup};
use crate::persist::{SAVE_KEY, SaveStore};
use crate::waking::WakingSequence;

/// Scan busy period in ticks (~2 s at 60 frames per second).
const SCAN_BUSY_TICKS: u32 = 120;

/// Chance threshold for a domain scan revealing the local creature.
const SCAN_REVEAL_THRESHOLD: f64 = 0.4;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible trial targets, scan rolls, and sampling.
    pub seed: u64,
    /// Storage key the save snapshot lives under.
    pub save_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            save_key: SAVE_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the storage key.
    pub fn with_save_key(mut self, key: impl Into<String>) -> Self {
        self.save_key = key.into();
        self
    }
}

/// A queued one-shot story dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialogue {
    /// The ally speaking.
    pub ally_id: String,
    /// What they say.
    pub message: String,
}

/// Codex service-record summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Worlds cleared so far.
    pub worlds_cleared: usize,
    /// Total worlds on the ring.
    pub total_worlds: usize,
    /// Current chronomatter balance.
    pub chronomatter: u64,
    /// Current ribbon level.
    pub ribbon_level: u32,
    /// Lore snippets collected.
    pub lore_snippets: usize,
}

/// An interactive game session.
pub struct GameSession {
    catalog: Catalog,
    progress: GameProgress,
    rng: StdRng,
    store: Box<dyn SaveStore>,
    echoes: Box<dyn EchoSource>,
    audio: Box<dyn AudioDirector>,
    save_key: String,
    trial: Option<Trial>,
    battle: Option<BossBattle>,
    waking: Option<WakingSequence>,
    scan_ticks: u32,
    popups: PopupTray,
    pending_dialogue: Option<Dialogue>,
    echo_text: String,
    archival_log: Option<String>,
    diagnostics: DiagnosticsLog,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.progress.state)
            .field("world", &self.progress.current_world_id)
            .field("chronomatter", &self.progress.chronomatter)
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

impl GameSession {
    /// Create a session, loading the snapshot under the configured key.
    ///
    /// An absent, unreadable, or malformed save is replaced by the default
    /// initial state; the failure is logged, never surfaced to the player.
    pub fn new(
        config: SessionConfig,
        store: Box<dyn SaveStore>,
        echoes: Box<dyn EchoSource>,
        audio: Box<dyn AudioDirector>,
    ) -> Self {
        let catalog = Catalog::standard();
        let mut diagnostics = DiagnosticsLog::default();
        let progress = match store.load(&config.save_key) {
            Ok(Some(snapshot)) => match serde_json::from_str(&snapshot) {
                Ok(progress) => progress,
                Err(err) => {
                    diagnostics.warn(format!("malformed save discarded: {err}"));
                    GameProgress::default()
                }
            },
            Ok(None) => GameProgress::default(),
            Err(err) => {
                diagnostics.error(format!("save load failed: {err}"));
                GameProgress::default()
            }
        };

        let mut session = Self {
            catalog,
            progress,
            rng: StdRng::seed_from_u64(config.seed),
            store,
            echoes,
            audio,
            save_key: config.save_key,
            trial: None,
            battle: None,
            waking: None,
            scan_ticks: 0,
            popups: PopupTray::new(),
            pending_dialogue: None,
            echo_text: String::new(),
            archival_log: None,
            diagnostics,
        };
        session.restore_ephemeral_state();
        session.sync_audio();
        session
    }

    /// Rebuild the ephemeral state a resumed save implies: a waking
    /// transcript mid-boot, or a fresh battle when saved in Boss state. A
    /// save pointing at an unknown world falls back to the map.
    fn restore_ephemeral_state(&mut self) {
        match self.progress.state {
            GameState::Waking => self.waking = Some(WakingSequence::new()),
            GameState::World | GameState::Boss => {
                let known = self
                    .progress
                    .current_world_id
                    .as_deref()
                    .is_some_and(|id| self.catalog.world(id).is_some());
                if !known {
                    self.diagnostics
                        .warn("save referenced an unknown world, returning to map");
                    self.progress.state = GameState::Map;
                    self.progress.current_world_id = None;
                } else if self.progress.state == GameState::Boss {
                    self.battle = self.build_battle();
                }
            }
            _ => {}
        }
    }

    // --- queries ------------------------------------------------------

    /// The current save snapshot.
    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    /// The content catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current top-level mode.
    pub fn state(&self) -> GameState {
        self.progress.state
    }

    /// The world being visited, if any.
    pub fn current_world(&self) -> Option<&World> {
        self.progress
            .current_world_id
            .as_deref()
            .and_then(|id| self.catalog.world(id))
    }

    /// The active trial, if any.
    pub fn trial(&self) -> Option<&Trial> {
        self.trial.as_ref()
    }

    /// The battle in progress, if any.
    pub fn battle(&self) -> Option<&BossBattle> {
        self.battle.as_ref()
    }

    /// Whether a domain scan is busy.
    pub fn is_scanning(&self) -> bool {
        self.scan_ticks > 0
    }

    /// The latest echo flavor line.
    pub fn echo_text(&self) -> &str {
        &self.echo_text
    }

    /// The latest scan database match, if any.
    pub fn archival_log(&self) -> Option<&str> {
        self.archival_log.as_deref()
    }

    /// Live reward popups.
    pub fn popups(&self) -> &[RewardPopup] {
        self.popups.active()
    }

    /// Recorded diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    /// Take the queued story dialogue, if any. One-shot.
    pub fn take_dialogue(&mut self) -> Option<Dialogue> {
        self.pending_dialogue.take()
    }

    // --- transitions --------------------------------------------------

    /// Leave the title screen and start the waking transcript.
    pub fn awaken(&mut self) -> bool {
        if self.progress.state != GameState::Title {
            return false;
        }
        self.progress.state = GameState::Waking;
        self.waking = Some(WakingSequence::new());
        self.audio.cue(AudioCue::Click);
        self.persist();
        true
    }

    /// Reveal the next waking line. Once the transcript is exhausted the
    /// session moves to the map and this returns `None`.
    pub fn advance_waking(&mut self) -> Option<&'static str> {
        if self.progress.state != GameState::Waking {
            return None;
        }
        let line = self.waking.as_mut().and_then(WakingSequence::advance);
        if line.is_none() {
            self.waking = None;
            self.progress.state = GameState::Map;
            self.persist();
        }
        line
    }

    /// Enter an unlocked world from the map.
    ///
    /// Selects a trial at random, records the world's lore as discovered,
    /// requests an echo line, and queues the scripted first-visit dialogue
    /// on a fresh save's first step onto Virellion.
    pub fn enter_world(&mut self, id: &str) -> bool {
        if self.progress.state != GameState::Map {
            return false;
        }
        if !self.catalog.is_unlocked(id, &self.progress.cleared_worlds) {
            return false;
        }
        let Some(world) = self.catalog.world(id) else {
            return false;
        };
        let (name, fragment, biome, order) =
            (world.name, world.fragment_name, world.biome, world.order);
        let first_contact = id == "virellion" && self.progress.cleared_worlds.is_empty();

        self.archival_log = None;
        let kind = TrialKind::choose(&mut self.rng);
        let order = effective_order(order, self.progress.upgrades.resonance_adaptation, kind);
        self.trial = Some(Trial::start(kind, order, &mut self.rng));

        self.progress.state = GameState::World;
        self.progress.current_world_id = Some(id.to_string());
        self.progress.discovered_lore.insert(id);

        if first_contact {
            self.pending_dialogue = Some(Dialogue {
                ally_id: "elyia".to_string(),
                message: "Onyzuka... your awakening ripples through the Ring. The first \
                          fragment is near, but Seraphon's shadows are already stirring."
                    .to_string(),
            });
            self.progress.met_allies.insert("elyia");
        }

        self.echo_text = self.resolve_echo(name, fragment);
        self.audio.cue(AudioCue::Click);
        self.audio.start_biome_ambient(biome);
        self.sync_audio();
        self.persist();
        true
    }

    /// Return from a world to the map, dropping the visit's ephemeral state.
    pub fn return_to_map(&mut self) -> bool {
        if self.progress.state != GameState::World {
            return false;
        }
        self.progress.state = GameState::Map;
        self.progress.current_world_id = None;
        self.trial = None;
        self.scan_ticks = 0;
        self.archival_log = None;
        self.audio.cue(AudioCue::Click);
        self.sync_audio();
        self.persist();
        true
    }

    /// Open the codex overlay from the map.
    pub fn open_codex(&mut self) -> bool {
        if self.progress.state != GameState::Map {
            return false;
        }
        self.progress.state = GameState::Codex;
        self.audio.cue(AudioCue::Click);
        self.persist();
        true
    }

    /// Close the codex overlay.
    pub fn close_codex(&mut self) -> bool {
        if self.progress.state != GameState::Codex {
            return false;
        }
        self.progress.state = GameState::Map;
        self.audio.cue(AudioCue::Click);
        self.persist();
        true
    }

    /// Step onto the boss confrontation.
    ///
    /// Only valid in a world, and only once the active trial has completed.
    /// A resumed save with no active trial may confront directly.
    pub fn confront_boss(&mut self) -> bool {
        if self.progress.state != GameState::World {
            return false;
        }
        if self.trial.as_ref().is_some_and(|t| !t.is_complete()) {
            return false;
        }
        let Some(battle) = self.build_battle() else {
            return false;
        };
        self.battle = Some(battle);
        self.progress.state = GameState::Boss;
        self.audio.cue(AudioCue::Click);
        self.sync_audio();
        self.persist();
        true
    }

    fn build_battle(&self) -> Option<BossBattle> {
        let world = self.current_world()?;
        let config =
            BattleConfig::for_world(world, &self.progress.upgrades, self.progress.ribbon_mode);
        Some(BossBattle::new(config))
    }

    // --- per-frame update ---------------------------------------------

    /// Advance every countdown and the active encounter by one frame.
    ///
    /// Returns the battle events emitted this frame (empty outside a boss
    /// fight). Terminal battle events are applied to the save before this
    /// returns.
    pub fn tick(&mut self) -> Vec<BattleEvent> {
        if self.scan_ticks > 0 {
            self.scan_ticks -= 1;
            if self.scan_ticks == 0 {
                self.sync_audio();
            }
        }
        self.popups.tick();
        if let Some(trial) = &mut self.trial {
            trial.tick();
        }

        let mut events = Vec::new();
        if self.progress.state == GameState::Boss
            && let Some(battle) = &mut self.battle
        {
            events = battle.tick();
        }
        for event in &events {
            match *event {
                BattleEvent::Victory { bonus } => self.handle_victory(bonus),
                BattleEvent::Defeat => self.handle_defeat(),
                _ => {}
            }
        }
        events
    }

    fn handle_victory(&mut self, bonus: u64) {
        let Some(world_id) = self.progress.current_world_id.clone() else {
            return;
        };
        let stage_count = self.catalog.main_arc().stages.len();
        economy::apply_boss_victory(&mut self.progress, &world_id, bonus, stage_count);
        self.battle = None;
        self.trial = None;
        self.scan_ticks = 0;
        self.audio.cue(AudioCue::Success);
        self.audio.start_biome_ambient("nebula");
        self.sync_audio();
        self.persist();
    }

    fn handle_defeat(&mut self) {
        // No penalty: health and projectiles were ephemeral, the save only
        // records the return to the map.
        self.progress.state = GameState::Map;
        self.progress.current_world_id = None;
        self.battle = None;
        self.trial = None;
        self.scan_ticks = 0;
        self.sync_audio();
        self.persist();
    }

    // --- battle passthrough -------------------------------------------

    /// Move the battle cursor.
    pub fn set_battle_cursor(&mut self, x: f64, y: f64) {
        if let Some(battle) = &mut self.battle {
            battle.set_cursor(x, y);
        }
    }

    /// Raise the battle shield, if possible.
    pub fn activate_shield(&mut self) -> bool {
        self.battle
            .as_mut()
            .is_some_and(BossBattle::activate_shield)
    }

    // --- trial passthrough --------------------------------------------

    /// Fire the timing trial's alignment check.
    pub fn trial_trigger(&mut self) -> Option<TrialOutcome> {
        let outcome = match &mut self.trial {
            Some(Trial::Timing(t)) => t.trigger(),
            _ => None,
        };
        self.after_trial_outcome(outcome)
    }

    /// Adjust the waveform trial's phase.
    pub fn trial_set_phase(&mut self, phase: f64) {
        if let Some(Trial::Waveform(t)) = &mut self.trial {
            t.set_phase(phase);
        }
    }

    /// Adjust the waveform trial's frequency.
    pub fn trial_set_freq(&mut self, freq: f64) {
        if let Some(Trial::Waveform(t)) = &mut self.trial {
            t.set_freq(freq);
        }
    }

    /// Lock in the waveform trial's signal.
    pub fn trial_submit(&mut self) -> Option<TrialOutcome> {
        let outcome = match &mut self.trial {
            Some(Trial::Waveform(t)) => t.submit(),
            _ => None,
        };
        self.after_trial_outcome(outcome)
    }

    /// Enter a symbol into the sequence trial.
    pub fn trial_input(&mut self, symbol: u8) -> Option<TrialOutcome> {
        let outcome = match &mut self.trial {
            Some(Trial::Sequence(t)) => t.input(symbol),
            _ => None,
        };
        self.after_trial_outcome(outcome)
    }

    fn after_trial_outcome(&mut self, outcome: Option<TrialOutcome>) -> Option<TrialOutcome> {
        // The trial's reward value is deliberately not credited to the
        // wallet; completion only unlocks the confrontation.
        if let Some(outcome) = outcome {
            self.audio.cue(if outcome.success {
                AudioCue::Success
            } else {
                AudioCue::Click
            });
        }
        outcome
    }

    // --- world actions ------------------------------------------------

    /// Run a domain scan.
    ///
    /// Only valid in a world and while no scan is busy. Reveals the local
    /// creature's lore with probability above the reveal threshold,
    /// otherwise requests ambient flavor text. Busy for ~2 s of ticks.
    pub fn perform_scan(&mut self) -> bool {
        if self.progress.state != GameState::World || self.is_scanning() {
            return false;
        }
        let Some(world_id) = self.progress.current_world_id.clone() else {
            return false;
        };
        self.scan_ticks = SCAN_BUSY_TICKS;
        self.audio.cue(AudioCue::ScanStart);
        self.sync_audio();
        let world_name = self.catalog.world(&world_id).map(|w| w.name);
        let creature = self
            .catalog
            .creature_for_world(&world_id)
            .map(|c| (c.id, c.name, c.lore));

        match creature {
            Some((id, name, lore)) if self.rng.random::<f64>() > SCAN_REVEAL_THRESHOLD => {
                self.archival_log =
                    Some(format!("DATABASE_MATCH: {} - {lore}", name.to_uppercase()));
                self.progress.unlocked_lore_snippets.insert(id);
                self.progress.discovered_creatures.insert(id);
            }
            _ => {
                if let Some(name) = world_name {
                    let line = self.resolve_echo(name, "Environmental Data");
                    self.echo_text = format!("[SCAN]: {line}");
                }
            }
        }
        self.persist();
        true
    }

    /// Credit a caught mote.
    ///
    /// Applies the channeling and stance multipliers, rolls the lore-snippet
    /// attachment, and spawns a floating reward popup at the catch position.
    /// Returns the credited amount.
    pub fn catch_mote(&mut self, base: u64, x: f64, y: f64) -> u64 {
        let gain = economy::mote_gain(base, &self.progress.upgrades, self.progress.ribbon_mode);
        self.progress.chronomatter += gain;

        let snippet = economy::sample_lore_snippet(&mut self.rng, &self.catalog);
        let snippet_text = snippet.map(|lore| {
            self.progress.unlocked_lore_snippets.insert(lore.id);
            format!("Synaptic Echo: {} - {}...", lore.name, preview(lore.lore, 60))
        });

        self.popups.spawn(gain, x, y, snippet_text);
        self.audio.cue(AudioCue::MoteCatch);
        self.persist();
        gain
    }

    /// Switch the ribbon stance. Free and immediate.
    pub fn set_ribbon_mode(&mut self, mode: RibbonMode) {
        self.progress.ribbon_mode = mode;
        self.audio.cue(AudioCue::Click);
        self.persist();
    }

    /// Buy one level of an upgrade track.
    ///
    /// Insufficient funds reject the purchase silently; the level-10 cap is
    /// the presenting caller's contract via [`economy::can_upgrade`].
    pub fn buy_upgrade(&mut self, kind: UpgradeKind) -> bool {
        let bought = economy::apply_upgrade(&mut self.progress, kind);
        if bought {
            self.audio.cue(AudioCue::Success);
            self.persist();
        }
        bought
    }

    // --- codex views --------------------------------------------------

    /// Every world with its derived lock status, in ring order.
    pub fn world_statuses(&self) -> Vec<(&World, WorldStatus)> {
        self.catalog
            .worlds
            .iter()
            .map(|w| {
                let status = self
                    .catalog
                    .status(w.id, &self.progress.cleared_worlds)
                    .unwrap_or(WorldStatus::Locked);
                (w, status)
            })
            .collect()
    }

    /// Temporal laws with their unlock flags.
    pub fn laws_with_status(&self) -> Vec<(&TemporalLaw, bool)> {
        self.catalog
            .laws
            .iter()
            .map(|l| (l, self.progress.unlocked_laws.contains(l.id)))
            .collect()
    }

    /// Creatures with their codex visibility flags.
    pub fn creatures_with_status(&self) -> Vec<(&Creature, bool)> {
        self.catalog
            .creatures
            .iter()
            .map(|c| (c, self.progress.unlocked_lore_snippets.contains(c.id)))
            .collect()
    }

    /// Artefacts with their codex visibility flags.
    pub fn artefacts_with_status(&self) -> Vec<(&Artefact, bool)> {
        self.catalog
            .artefacts
            .iter()
            .map(|a| (a, self.progress.discovered_artefacts.contains(a.id)))
            .collect()
    }

    /// Allies with their met flags.
    pub fn allies_with_status(&self) -> Vec<(&Ally, bool)> {
        self.catalog
            .allies
            .iter()
            .map(|a| (a, self.progress.met_allies.contains(a.id)))
            .collect()
    }

    /// All factions (always visible in the codex).
    pub fn factions(&self) -> &[Faction] {
        &self.catalog.factions
    }

    /// All quests.
    pub fn quests(&self) -> &[Quest] {
        &self.catalog.quests
    }

    /// The main arc and the active stage index.
    pub fn arc_progress(&self) -> (&NarrativeArc, usize) {
        let arc = self.catalog.main_arc();
        (arc, self.progress.active_arc_stage.min(arc.stages.len() - 1))
    }

    /// The codex service-record summary.
    pub fn service_record(&self) -> ServiceRecord {
        ServiceRecord {
            worlds_cleared: self.progress.cleared_worlds.len(),
            total_worlds: self.catalog.worlds.len(),
            chronomatter: self.progress.chronomatter,
            ribbon_level: self.progress.ribbon_level,
            lore_snippets: self.progress.unlocked_lore_snippets.len(),
        }
    }

    // --- internals ----------------------------------------------------

    fn resolve_echo(&mut self, world_name: &str, fragment_name: &str) -> String {
        match self.echoes.echo(world_name, fragment_name) {
            Ok(line) => line,
            Err(EchoError::QuotaExhausted) => {
                self.diagnostics
                    .warn("echo quota exhausted, serving local archives");
                fallback_line(&mut self.rng).to_string()
            }
            Err(err) => {
                self.diagnostics.error(format!("echo source failed: {err}"));
                fallback_line(&mut self.rng).to_string()
            }
        }
    }

    fn sync_audio(&mut self) {
        let intensity = if self.progress.state == GameState::Boss {
            1.6
        } else if self.is_scanning() {
            1.4
        } else {
            1.0
        };
        self.audio.set_intensity(intensity);
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.progress) {
            Ok(snapshot) => {
                if let Err(err) = self.store.save(&self.save_key, &snapshot) {
                    self.diagnostics.error(format!("save failed: {err}"));
                }
            }
            Err(err) => {
                self.diagnostics
                    .error(format!("save serialization failed: {err}"));
            }
        }
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::audio::NullAudio;
    use crate::diagnostics::Severity;
    use crate::echo::{EchoResult, FALLBACK_ECHOES, LocalEchoes};
    use crate::persist::{FileStore, MemoryStore, PersistError, PersistResult};
    use crate::waking::WAKING_LOGS;
    use oz_trials::SYMBOL_COUNT;

    fn session() -> GameSession {
        session_with_seed(42)
    }

    fn session_with_seed(seed: u64) -> GameSession {
        GameSession::new(
            SessionConfig::default().with_seed(seed),
            Box::new(MemoryStore::new()),
            Box::new(LocalEchoes::new(7)),
            Box::new(NullAudio),
        )
    }

    fn session_with_snapshot(snapshot: &str) -> GameSession {
        GameSession::new(
            SessionConfig::default(),
            Box::new(MemoryStore::with_snapshot(SAVE_KEY, snapshot)),
            Box::new(LocalEchoes::new(7)),
            Box::new(NullAudio),
        )
    }

    fn to_map(s: &mut GameSession) {
        s.awaken();
        while s.advance_waking().is_some() {}
    }

    /// End the active trial with one action, whatever kind it is.
    fn finish_trial(s: &mut GameSession) {
        match s.trial().map(Trial::kind) {
            Some(TrialKind::Timing) => {
                s.trial_trigger();
            }
            Some(TrialKind::Waveform) => {
                s.trial_submit();
            }
            Some(TrialKind::Sequence) => {
                let wrong = match s.trial() {
                    Some(Trial::Sequence(t)) => (t.sequence()[0] + 1) % SYMBOL_COUNT,
                    _ => 0,
                };
                s.trial_input(wrong);
            }
            None => {}
        }
    }

    /// A snapshot saved mid-visit on the given world, with Virellion
    /// already cleared.
    fn world_snapshot(world_id: &str) -> String {
        let mut p = GameProgress {
            state: GameState::World,
            current_world_id: Some(world_id.to_string()),
            ribbon_level: 2,
            ..GameProgress::default()
        };
        p.cleared_worlds.insert("virellion");
        serde_json::to_string(&p).unwrap()
    }

    struct FailingStore;

    impl SaveStore for FailingStore {
        fn load(&self, _key: &str) -> PersistResult<Option<String>> {
            Err(PersistError::Io(std::io::Error::other("disk gone")))
        }
        fn save(&mut self, _key: &str, _snapshot: &str) -> PersistResult<()> {
            Err(PersistError::Io(std::io::Error::other("disk gone")))
        }
    }

    struct FailingEchoes {
        quota: bool,
    }

    impl EchoSource for FailingEchoes {
        fn echo(&mut self, _world: &str, _fragment: &str) -> EchoResult<String> {
            if self.quota {
                Err(EchoError::QuotaExhausted)
            } else {
                Err(EchoError::Unavailable("connection reset".to_string()))
            }
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl AudioDirector for Recorder {
        fn cue(&mut self, cue: AudioCue) {
            self.0.borrow_mut().push(format!("cue:{cue:?}"));
        }
        fn set_intensity(&mut self, intensity: f64) {
            self.0.borrow_mut().push(format!("intensity:{intensity}"));
        }
        fn start_biome_ambient(&mut self, biome: &str) {
            self.0.borrow_mut().push(format!("ambient:{biome}"));
        }
    }

    #[test]
    fn fresh_session_starts_at_title() {
        let s = session();
        assert_eq!(s.state(), GameState::Title);
        assert_eq!(s.progress().chronomatter, 250);
        assert!(s.diagnostics().is_empty());
    }

    #[test]
    fn malformed_save_is_discarded_with_warning() {
        let s = session_with_snapshot("{ this is not json");
        assert_eq!(s.state(), GameState::Title);
        assert_eq!(s.progress().chronomatter, 250);
        assert_eq!(
            s.diagnostics().with_severity(Severity::Warning).len(),
            1,
            "{:?}",
            s.diagnostics().entries()
        );
    }

    #[test]
    fn unreadable_store_recovers_to_default() {
        let mut s = GameSession::new(
            SessionConfig::default(),
            Box::new(FailingStore),
            Box::new(LocalEchoes::new(7)),
            Box::new(NullAudio),
        );
        assert_eq!(s.state(), GameState::Title);
        assert_eq!(s.diagnostics().with_severity(Severity::Error).len(), 1);
        // Gameplay continues; the failing write only adds diagnostics.
        assert!(s.awaken());
        assert_eq!(s.state(), GameState::Waking);
        assert_eq!(s.diagnostics().with_severity(Severity::Error).len(), 2);
    }

    #[test]
    fn waking_transcript_reveals_then_reaches_map() {
        let mut s = session();
        assert!(s.awaken());
        assert!(!s.awaken()); // already awake
        let lines: Vec<&str> = std::iter::from_fn(|| s.advance_waking()).collect();
        assert_eq!(lines, WAKING_LOGS);
        assert_eq!(s.state(), GameState::Map);
    }

    #[test]
    fn enter_world_requires_map_state_and_unlock() {
        let mut s = session();
        assert!(!s.enter_world("virellion")); // still on the title screen
        to_map(&mut s);
        assert!(!s.enter_world("iridia")); // locked behind virellion
        assert!(!s.enter_world("nowhere"));
        assert!(s.enter_world("virellion"));
        assert_eq!(s.state(), GameState::World);
        assert_eq!(s.current_world().unwrap().id, "virellion");
        assert!(s.progress().discovered_lore.contains("virellion"));
        assert!(s.trial().is_some());
        assert!(!s.echo_text().is_empty());
        assert!(!s.enter_world("virellion")); // already inside a world
    }

    #[test]
    fn scripted_dialogue_fires_once_on_first_virellion_entry() {
        let mut s = session();
        to_map(&mut s);
        s.enter_world("virellion");
        let dialogue = s.take_dialogue().unwrap();
        assert_eq!(dialogue.ally_id, "elyia");
        assert!(dialogue.message.contains("Seraphon"));
        assert!(s.take_dialogue().is_none()); // one-shot

        // No dialogue once any world has been cleared.
        let mut s = session_with_snapshot(&world_snapshot("iridia"));
        s.return_to_map();
        s.enter_world("virellion");
        assert!(s.take_dialogue().is_none());
    }

    #[test]
    fn confrontation_gated_on_trial_completion() {
        let mut s = session();
        to_map(&mut s);
        s.enter_world("virellion");
        assert!(!s.confront_boss());
        finish_trial(&mut s);
        assert!(s.trial().unwrap().is_complete());
        assert!(s.confront_boss());
        assert_eq!(s.state(), GameState::Boss);
        assert!(s.battle().is_some());
    }

    #[test]
    fn trial_reward_is_not_credited_to_the_wallet() {
        // The completion bonus only gates the confrontation; the wallet
        // moves on motes and boss victories alone.
        let mut s = session();
        to_map(&mut s);
        s.enter_world("virellion");
        let before = s.progress().chronomatter;
        finish_trial(&mut s);
        assert!(s.trial().unwrap().outcome().is_some());
        assert_eq!(s.progress().chronomatter, before);
    }

    #[test]
    fn resumed_world_save_allows_direct_confrontation() {
        let mut s = session_with_snapshot(&world_snapshot("iridia"));
        assert_eq!(s.state(), GameState::World);
        assert!(s.trial().is_none());
        assert!(s.confront_boss());
        assert_eq!(s.state(), GameState::Boss);
    }

    #[test]
    fn boss_victory_applies_reward_and_returns_to_map() {
        let mut s = session_with_snapshot(&world_snapshot("iridia"));
        assert!(s.confront_boss());
        s.set_battle_cursor(300.0, 150.0); // hug the sentinel

        let mut bonuses = Vec::new();
        for _ in 0..600 {
            for event in s.tick() {
                if let BattleEvent::Victory { bonus } = event {
                    bonuses.push(bonus);
                }
            }
        }

        assert_eq!(bonuses, vec![1000]);
        assert_eq!(s.state(), GameState::Map);
        assert!(s.battle().is_none());
        assert!(s.progress().is_cleared("iridia"));
        assert_eq!(s.progress().ribbon_level, 3);
        assert_eq!(s.progress().chronomatter, 1250);
        assert_eq!(s.progress().active_arc_stage, 1);
        assert_eq!(s.progress().current_world_id, None);
    }

    #[test]
    fn boss_defeat_returns_to_map_without_penalty() {
        let mut s = session_with_snapshot(&world_snapshot("iridia"));
        assert!(s.confront_boss());
        s.set_battle_cursor(500.0, 380.0); // out of reach, eating every shot

        let mut saw_defeat = false;
        for _ in 0..2000 {
            for event in s.tick() {
                if event == BattleEvent::Defeat {
                    saw_defeat = true;
                }
            }
        }

        assert!(saw_defeat);
        assert_eq!(s.state(), GameState::Map);
        assert!(s.battle().is_none());
        assert_eq!(s.progress().chronomatter, 250);
        assert!(!s.progress().is_cleared("iridia"));
        assert_eq!(s.progress().ribbon_level, 2);
    }

    #[test]
    fn scan_has_a_busy_window_and_no_concurrent_runs() {
        let mut s = session();
        to_map(&mut s);
        s.enter_world("virellion");
        assert!(s.perform_scan());
        assert!(s.is_scanning());
        assert!(!s.perform_scan()); // busy: no restart, no timer reset
        for _ in 0..119 {
            s.tick();
        }
        assert!(s.is_scanning());
        s.tick();
        assert!(!s.is_scanning());
        assert!(s.perform_scan());
    }

    #[test]
    fn scan_reveal_unlocks_the_local_creature() {
        let mut revealed = false;
        for seed in 0..40 {
            let mut s = session_with_seed(seed);
            to_map(&mut s);
            s.enter_world("virellion");
            s.perform_scan();
            if let Some(log) = s.archival_log() {
                assert!(log.starts_with("DATABASE_MATCH: THE LIVING SPIRALS"));
                assert!(s.progress().unlocked_lore_snippets.contains("spirales_vivantes"));
                assert!(s.progress().discovered_creatures.contains("spirales_vivantes"));
                revealed = true;
                break;
            }
            // The miss branch serves scan flavor instead.
            assert!(s.echo_text().starts_with("[SCAN]:"));
        }
        assert!(revealed, "no seed in 0..40 revealed the creature");
    }

    #[test]
    fn scan_without_local_creature_serves_flavor() {
        let mut s = session_with_snapshot(&world_snapshot("entropy-core"));
        assert!(s.perform_scan());
        assert!(s.echo_text().starts_with("[SCAN]:"));
        assert!(s.archival_log().is_none());
    }

    #[test]
    fn scan_only_valid_inside_a_world() {
        let mut s = session();
        assert!(!s.perform_scan());
        to_map(&mut s);
        assert!(!s.perform_scan());
    }

    #[test]
    fn mote_catch_credits_scaled_gain_and_spawns_popup() {
        let mut s = session();
        to_map(&mut s);
        let gain = s.catch_mote(10, 120.0, 80.0);
        assert_eq!(gain, 11); // 10 * 1.1 channeling, Shield stance
        assert_eq!(s.progress().chronomatter, 261);
        assert_eq!(s.popups().len(), 1);
        assert_eq!(s.popups()[0].amount, 11);

        s.set_ribbon_mode(RibbonMode::Capture);
        let gain = s.catch_mote(10, 40.0, 40.0);
        assert_eq!(gain, 17); // 10 * 1.1 * 1.5, rounded
        assert_eq!(s.popups().len(), 2);
        let ids: Vec<u64> = s.popups().iter().map(|p| p.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn popups_expire_through_ticks() {
        let mut s = session();
        to_map(&mut s);
        s.catch_mote(10, 0.0, 0.0);
        for _ in 0..90 {
            s.tick();
        }
        assert!(s.popups().is_empty());
    }

    #[test]
    fn ribbon_mode_switch_is_free_and_immediate() {
        let mut s = session();
        let before = s.progress().chronomatter;
        s.set_ribbon_mode(RibbonMode::Blade);
        assert_eq!(s.progress().ribbon_mode, RibbonMode::Blade);
        assert_eq!(s.progress().chronomatter, before);
    }

    #[test]
    fn upgrade_purchase_deducts_or_rejects() {
        let mut s = session();
        assert!(!s.buy_upgrade(UpgradeKind::ArmorIntegrity)); // 250 < 500
        assert_eq!(s.progress().upgrades.armor_integrity, 1);

        let rich = GameProgress {
            chronomatter: 1000,
            ..GameProgress::default()
        };
        let mut s = session_with_snapshot(&serde_json::to_string(&rich).unwrap());
        assert!(s.buy_upgrade(UpgradeKind::ChronomatterChanneling));
        assert_eq!(s.progress().chronomatter, 500);
        assert_eq!(s.progress().upgrades.chronomatter_channeling, 2);
    }

    #[test]
    fn every_mutation_is_persisted_synchronously() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = GameSession::new(
            SessionConfig::default(),
            Box::new(FileStore::new(dir.path())),
            Box::new(LocalEchoes::new(7)),
            Box::new(NullAudio),
        );
        to_map(&mut s);
        s.enter_world("virellion");
        s.catch_mote(10, 0.0, 0.0);

        let raw =
            std::fs::read_to_string(dir.path().join("onyzuka_chrono_save.json")).unwrap();
        let on_disk: GameProgress = serde_json::from_str(&raw).unwrap();
        assert_eq!(&on_disk, s.progress());
        assert_eq!(on_disk.state, GameState::World);
        assert!(on_disk.discovered_lore.contains("virellion"));
    }

    #[test]
    fn save_survives_a_session_restart() {
        let dir = tempfile::tempdir().unwrap();
        let make = || {
            GameSession::new(
                SessionConfig::default(),
                Box::new(FileStore::new(dir.path())),
                Box::new(LocalEchoes::new(7)),
                Box::new(NullAudio),
            )
        };
        let mut s = make();
        to_map(&mut s);
        s.enter_world("virellion");
        let saved = s.progress().clone();
        drop(s);

        let mut s = make();
        assert_eq!(s.progress(), &saved);
        assert_eq!(s.state(), GameState::World);
        // No trial survives a restart, so the confrontation opens directly.
        assert!(s.trial().is_none());
        assert!(s.confront_boss());
    }

    #[test]
    fn save_pointing_at_unknown_world_returns_to_map() {
        let stale = GameProgress {
            state: GameState::World,
            current_world_id: Some("deleted-world".to_string()),
            ..GameProgress::default()
        };
        let s = session_with_snapshot(&serde_json::to_string(&stale).unwrap());
        assert_eq!(s.state(), GameState::Map);
        assert_eq!(s.progress().current_world_id, None);
        assert_eq!(s.diagnostics().with_severity(Severity::Warning).len(), 1);
    }

    #[test]
    fn resumed_boss_save_rebuilds_the_battle() {
        let mid_fight = GameProgress {
            state: GameState::Boss,
            current_world_id: Some("virellion".to_string()),
            ..GameProgress::default()
        };
        let s = session_with_snapshot(&serde_json::to_string(&mid_fight).unwrap());
        assert_eq!(s.state(), GameState::Boss);
        let battle = s.battle().unwrap();
        assert_eq!(battle.boss_health(), 100.0);
    }

    #[test]
    fn echo_quota_failure_warns_and_falls_back() {
        let mut s = GameSession::new(
            SessionConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(FailingEchoes { quota: true }),
            Box::new(NullAudio),
        );
        to_map(&mut s);
        assert!(s.enter_world("virellion"));
        assert!(FALLBACK_ECHOES.contains(&s.echo_text()));
        assert_eq!(s.diagnostics().with_severity(Severity::Warning).len(), 1);
        assert_eq!(s.diagnostics().with_severity(Severity::Error).len(), 0);
    }

    #[test]
    fn echo_outage_errors_and_falls_back() {
        let mut s = GameSession::new(
            SessionConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(FailingEchoes { quota: false }),
            Box::new(NullAudio),
        );
        to_map(&mut s);
        assert!(s.enter_world("virellion"));
        assert!(FALLBACK_ECHOES.contains(&s.echo_text()));
        assert_eq!(s.diagnostics().with_severity(Severity::Error).len(), 1);
    }

    #[test]
    fn audio_receives_ambient_and_intensity_directives() {
        let recorder = Recorder::default();
        let mut s = GameSession::new(
            SessionConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(LocalEchoes::new(7)),
            Box::new(recorder.clone()),
        );
        to_map(&mut s);
        s.enter_world("virellion");
        finish_trial(&mut s);
        s.confront_boss();
        let log = recorder.0.borrow();
        assert!(log.contains(&"ambient:Nebula".to_string()));
        assert!(log.contains(&"intensity:1.6".to_string()));
        assert!(log.iter().any(|l| l.starts_with("cue:")));
    }

    #[test]
    fn codex_opens_only_from_the_map() {
        let mut s = session();
        assert!(!s.open_codex()); // title screen
        to_map(&mut s);
        assert!(s.open_codex());
        assert_eq!(s.state(), GameState::Codex);
        assert!(!s.open_codex());
        assert!(s.close_codex());
        assert_eq!(s.state(), GameState::Map);

        s.enter_world("virellion");
        assert!(!s.open_codex()); // not from inside a world
    }

    #[test]
    fn codex_views_respect_unlock_sets() {
        let s = session();
        let laws = s.laws_with_status();
        assert!(laws.iter().any(|(l, unlocked)| l.id == "L01" && *unlocked));
        assert!(laws.iter().any(|(l, unlocked)| l.id == "L03" && !*unlocked));

        let artefacts = s.artefacts_with_status();
        assert!(
            artefacts
                .iter()
                .any(|(a, unlocked)| a.id == "blades" && *unlocked)
        );
        assert!(
            artefacts
                .iter()
                .any(|(a, unlocked)| a.id == "codex" && !*unlocked)
        );

        assert!(s.creatures_with_status().iter().all(|(_, u)| !*u));
        let allies = s.allies_with_status();
        assert!(allies.iter().any(|(a, met)| a.id == "elyia" && *met));
        assert!(allies.iter().any(|(a, met)| a.id == "kalder" && !*met));
        assert_eq!(s.factions().len(), 4);
        assert_eq!(s.quests().len(), 7);
    }

    #[test]
    fn arc_progress_and_service_record() {
        let s = session();
        let (arc, stage) = s.arc_progress();
        assert_eq!(arc.id, "main");
        assert_eq!(arc.stages[stage], "Awakening");

        let record = s.service_record();
        assert_eq!(record.worlds_cleared, 0);
        assert_eq!(record.total_worlds, 11);
        assert_eq!(record.chronomatter, 250);
        assert_eq!(record.ribbon_level, 1);
        assert_eq!(record.lore_snippets, 0);
    }

    #[test]
    fn world_statuses_follow_the_ring() {
        let s = session();
        let statuses = s.world_statuses();
        assert_eq!(statuses[0].1, WorldStatus::Unlocked);
        assert!(
            statuses
                .iter()
                .skip(1)
                .all(|(_, status)| *status == WorldStatus::Locked)
        );
    }

    #[test]
    fn return_to_map_clears_visit_state() {
        let mut s = session();
        to_map(&mut s);
        s.enter_world("virellion");
        s.perform_scan();
        assert!(s.return_to_map());
        assert_eq!(s.state(), GameState::Map);
        assert_eq!(s.progress().current_world_id, None);
        assert!(s.trial().is_none());
        assert!(!s.is_scanning());
        assert!(!s.return_to_map()); // already there
    }
}

