//! The interactive play loop.
//!
//! A line-oriented frontend over [`GameSession`]: the terminal stands in for
//! the renderer, so frame advancement is explicit (`wait`) and mote catches
//! arrive as commands. The session itself enforces every transition rule.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use oz_battle::BattleEvent;
use oz_core::{GameState, RibbonMode, UpgradeKind, economy};
use oz_session::GameSession;
use oz_trials::{Trial, TrialOutcome};

use super::render;

pub fn run(dir: &Path, seed: u64) -> Result<(), String> {
    let mut session = super::open_session(dir, seed);

    println!("  {} Onyzuka session (seed {seed})", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("The Ring keeps turning.");
            break;
        }

        let output = process(&mut session, input);
        if !output.is_empty() {
            println!("{output}\n");
        }
    }

    Ok(())
}

/// Dispatch one line of input against the session.
fn process(session: &mut GameSession, input: &str) -> String {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return String::new();
    };
    let cmd = first.to_lowercase();
    let args = &parts[1..];

    match cmd.as_str() {
        "help" => help(),
        "awaken" => do_awaken(session),
        "status" => status_line(session),
        "map" => render::ring_table(session),
        "enter" => do_enter(session, args),
        "back" => do_back(session),
        "scan" => do_scan(session),
        "wait" => do_wait(session, args),
        "trial" => trial_view(session),
        "align" => outcome_text(session.trial_trigger()),
        "tune" => do_tune(session, args),
        "lock" => outcome_text(session.trial_submit()),
        "seq" => do_seq(session, args),
        "confront" => do_confront(session),
        "fight" => auto_fight(session),
        "mote" => do_mote(session, args),
        "mode" => do_mode(session, args),
        "evolve" => do_evolve(session, args),
        "codex" => do_codex(session, args),
        other => format!("unknown command: {other} (try 'help')"),
    }
}

fn help() -> String {
    "Commands:\n  \
     awaken              Leave the title screen\n  \
     map                 Show the ring of worlds\n  \
     enter <world-id>    Step onto an unlocked world\n  \
     scan                Scan the domain (busy ~2s of ticks)\n  \
     trial               Show the active trial\n  \
     align               Timing trial: fire the alignment check\n  \
     tune <phase> <freq> Waveform trial: adjust your signal\n  \
     lock                Waveform trial: lock the signal in\n  \
     seq <digits>        Sequence trial: enter symbols, e.g. seq 0213\n  \
     wait [n]            Advance n ticks (default 60)\n  \
     confront            Face the sentinel (after the trial ends)\n  \
     fight               Auto-resolve the boss battle\n  \
     mote [base]         Catch a drifting mote (default base 10)\n  \
     mode <stance>       shield | blade | capture | analysis | propulsion\n  \
     evolve <track>      armor | channeling | adaptation\n  \
     codex [tab]         Open the codex (from the map)\n  \
     back                Return to the map / close the codex\n  \
     status              Current standing\n  \
     quit                Leave the session"
        .to_string()
}

fn do_awaken(session: &mut GameSession) -> String {
    if !session.awaken() {
        return "Already awake.".to_string();
    }
    let mut transcript: Vec<String> = Vec::new();
    while let Some(line) = session.advance_waking() {
        transcript.push(format!("  {}", line.dimmed()));
    }
    transcript.push("You stand before the Ring of Ages.".to_string());
    transcript.join("\n")
}

fn status_line(session: &GameSession) -> String {
    let p = session.progress();
    let place = match session.current_world() {
        Some(world) => world.name.to_string(),
        None => "the Ring".to_string(),
    };
    format!(
        "State: {:?} | Location: {place} | {} CM | Ribbon Lv{} | Mode {:?}",
        p.state, p.chronomatter, p.ribbon_level, p.ribbon_mode
    )
}

fn do_enter(session: &mut GameSession, args: &[&str]) -> String {
    let Some(id) = args.first() else {
        return "usage: enter <world-id>".to_string();
    };
    if !session.enter_world(id) {
        return "That world is out of reach.".to_string();
    }
    let mut out = String::new();
    let world = session.current_world().expect("entered world");
    out.push_str(&format!(
        "{} — {}\n\"{}\"",
        world.name.bold(),
        world.ambiance,
        session.echo_text().italic()
    ));
    if let Some(dialogue) = session.take_dialogue() {
        out.push_str(&format!("\n[{}] {}", dialogue.ally_id, dialogue.message));
    }
    if let Some(trial) = session.trial() {
        out.push_str(&format!("\nA trial bars the sentinel: {:?}", trial.kind()));
    }
    out
}

fn do_back(session: &mut GameSession) -> String {
    if session.close_codex() || session.return_to_map() {
        "Back at the Ring.".to_string()
    } else {
        "Nowhere to go back to.".to_string()
    }
}

fn do_scan(session: &mut GameSession) -> String {
    if !session.perform_scan() {
        return "Scanner busy or out of range.".to_string();
    }
    match session.archival_log() {
        Some(log) => log.to_string(),
        None => session.echo_text().to_string(),
    }
}

fn do_wait(session: &mut GameSession, args: &[&str]) -> String {
    let ticks: u32 = args.first().and_then(|a| a.parse().ok()).unwrap_or(60);
    let mut lines = Vec::new();
    for _ in 0..ticks {
        for event in session.tick() {
            if let Some(line) = event_line(&event) {
                lines.push(line);
            }
        }
    }
    if lines.is_empty() {
        format!("{ticks} ticks pass.")
    } else {
        lines.join("\n")
    }
}

fn trial_view(session: &GameSession) -> String {
    match session.trial() {
        None => "No trial is active.".to_string(),
        Some(trial) if trial.is_complete() => {
            "The trial has ended; the sentinel awaits.".to_string()
        }
        Some(Trial::Timing(t)) => format!(
            "Timing alignment: scale {:.3}, target 1.000, tolerance {:.3}. \
             Use 'wait' to let it drift, 'align' to fire.",
            t.scale(),
            t.tolerance()
        ),
        Some(Trial::Waveform(t)) => format!(
            "Waveform match: your signal is phase {:.2}, freq {:.2} (tolerance {:.2}). \
             Use 'tune <phase> <freq>' then 'lock'.",
            t.phase(),
            t.freq(),
            t.tolerance()
        ),
        Some(Trial::Sequence(t)) => format!(
            "Sequence memory: reproduce {:?} with 'seq', {}/{} entered.",
            t.sequence(),
            t.progress(),
            t.sequence().len()
        ),
    }
}

fn do_tune(session: &mut GameSession, args: &[&str]) -> String {
    let (Some(phase), Some(freq)) = (
        args.first().and_then(|a| a.parse::<f64>().ok()),
        args.get(1).and_then(|a| a.parse::<f64>().ok()),
    ) else {
        return "usage: tune <phase> <freq>".to_string();
    };
    session.trial_set_phase(phase);
    session.trial_set_freq(freq);
    trial_view(session)
}

fn do_seq(session: &mut GameSession, args: &[&str]) -> String {
    let digits: Vec<u8> = args
        .join("")
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    if digits.is_empty() {
        return "usage: seq <digits>, e.g. seq 0213".to_string();
    }
    for digit in digits {
        if let Some(outcome) = session.trial_input(digit) {
            return outcome_text(Some(outcome));
        }
    }
    trial_view(session)
}

fn outcome_text(outcome: Option<TrialOutcome>) -> String {
    match outcome {
        Some(TrialOutcome {
            success: true,
            reward,
        }) => format!(
            "{} Resonance locked (echo value {reward}). The sentinel awaits.",
            "Synchronized.".green()
        ),
        Some(TrialOutcome { reward, .. }) => format!(
            "{} A faint echo ({reward}) fades. The sentinel awaits anyway.",
            "Desynchronized.".yellow()
        ),
        None => "Nothing to do — wrong trial or already finished.".to_string(),
    }
}

fn do_confront(session: &mut GameSession) -> String {
    if session.confront_boss() {
        "The sentinel descends. Use 'fight' to resolve the battle.".to_string()
    } else {
        "The sentinel is beyond reach until the trial ends.".to_string()
    }
}

/// Resolve the battle with a simple policy: hug the sentinel for proximity
/// damage, fall back and shield while it telegraphs the blast.
fn auto_fight(session: &mut GameSession) -> String {
    let mut lines = Vec::new();
    for _ in 0..20_000 {
        if session.state() != GameState::Boss {
            break;
        }
        let Some(battle) = session.battle() else {
            break;
        };
        let (bx, by) = battle.boss_position();
        if battle.is_charging() {
            if battle.can_shield() {
                session.activate_shield();
            }
            session.set_battle_cursor(bx + 220.0, by + 160.0);
        } else {
            session.set_battle_cursor(bx, by + 40.0);
        }
        for event in session.tick() {
            if let Some(line) = event_line(&event) {
                lines.push(line);
            }
        }
    }
    lines.join("\n")
}

fn event_line(event: &BattleEvent) -> Option<String> {
    match event {
        BattleEvent::ChargeBegan => Some("The sentinel gathers a critical charge...".to_string()),
        BattleEvent::ChargeBlast { hit: true } => Some("The blast catches you!".yellow().to_string()),
        BattleEvent::Victory { bonus } => Some(format!(
            "{} The sentinel dissolves. +{bonus} CM.",
            "VICTORY.".green().bold()
        )),
        BattleEvent::Defeat => Some(format!(
            "{} Your frame gives out. The Ring reclaims you.",
            "DEFEAT.".red().bold()
        )),
        _ => None,
    }
}

fn do_mote(session: &mut GameSession, args: &[&str]) -> String {
    let base: u64 = args.first().and_then(|a| a.parse().ok()).unwrap_or(10);
    let gain = session.catch_mote(base, 0.0, 0.0);
    let snippet = session
        .popups()
        .last()
        .and_then(|p| p.lore_snippet.clone());
    match snippet {
        Some(snippet) => format!("+{gain} CM — {snippet}"),
        None => format!("+{gain} CM"),
    }
}

fn do_mode(session: &mut GameSession, args: &[&str]) -> String {
    let mode = match args.first().map(|a| a.to_lowercase()).as_deref() {
        Some("shield") => RibbonMode::Shield,
        Some("blade") => RibbonMode::Blade,
        Some("capture") => RibbonMode::Capture,
        Some("analysis") => RibbonMode::Analysis,
        Some("propulsion") => RibbonMode::Propulsion,
        _ => return "usage: mode <shield|blade|capture|analysis|propulsion>".to_string(),
    };
    session.set_ribbon_mode(mode);
    format!("Ribbons reconfigured: {mode:?}")
}

fn do_evolve(session: &mut GameSession, args: &[&str]) -> String {
    let (kind, level) = match args.first().map(|a| a.to_lowercase()).as_deref() {
        Some("armor") => (
            UpgradeKind::ArmorIntegrity,
            session.progress().upgrades.armor_integrity,
        ),
        Some("channeling") => (
            UpgradeKind::ChronomatterChanneling,
            session.progress().upgrades.chronomatter_channeling,
        ),
        Some("adaptation") => (
            UpgradeKind::ResonanceAdaptation,
            session.progress().upgrades.resonance_adaptation,
        ),
        _ => return "usage: evolve <armor|channeling|adaptation>".to_string(),
    };
    if !economy::can_upgrade(level) {
        return "That track is already at its peak.".to_string();
    }
    if session.buy_upgrade(kind) {
        format!("Evolved to level {}.", level + 1)
    } else {
        format!(
            "Not enough chronomatter ({} CM needed).",
            economy::upgrade_cost(level)
        )
    }
}

fn do_codex(session: &mut GameSession, args: &[&str]) -> String {
    let tab = args.first().copied().unwrap_or("archives");
    if session.state() != GameState::Codex && !session.open_codex() {
        return "The codex only opens from the map.".to_string();
    }
    render::codex_tab(session, tab).unwrap_or_else(|e| e)
}
