//! Table and panel rendering shared by the CLI commands.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use oz_core::{WorldStatus, economy};
use oz_session::GameSession;

/// Render the ring map: every world with its derived status.
pub fn ring_table(session: &GameSession) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["World", "Id", "Order", "Biome", "Status"]);

    for (world, status) in session.world_statuses() {
        let status_str = match status {
            WorldStatus::Cleared => "RESTORED".green().to_string(),
            WorldStatus::Unlocked => "REACHABLE".cyan().to_string(),
            WorldStatus::Locked => "FRACTURED".dimmed().to_string(),
        };
        table.add_row(vec![
            world.name.to_string(),
            world.id.to_string(),
            world.order.to_string(),
            world.biome.to_string(),
            status_str,
        ]);
    }
    table.to_string()
}

/// Render the service record panel.
pub fn service_record(session: &GameSession) -> String {
    let record = session.service_record();
    let (arc, stage) = session.arc_progress();
    format!(
        "  Service Record: Onyzuka\n  Worlds restored: {}/{}\n  Chronomatter: {} CM\n  \
         Ribbon level: {}\n  Synaptic echoes: {}\n  Arc: {} — {}",
        record.worlds_cleared,
        record.total_worlds,
        record.chronomatter,
        record.ribbon_level,
        record.lore_snippets,
        arc.title,
        arc.stages[stage].bold(),
    )
}

/// Render one codex tab.
pub fn codex_tab(session: &GameSession, tab: &str) -> Result<String, String> {
    match tab.to_lowercase().as_str() {
        "archives" => Ok(format!(
            "{}\n\n{}",
            service_record(session),
            ring_table(session)
        )),
        "laws" => {
            let mut table = Table::new();
            table.set_header(vec!["Id", "Title", "Directive"]);
            for (law, unlocked) in session.laws_with_status() {
                if unlocked {
                    table.add_row(vec![law.id, law.title, law.description]);
                } else {
                    table.add_row(vec![law.id, "Data Redacted", "Recover more fragments."]);
                }
            }
            Ok(table.to_string())
        }
        "factions" => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Faction", "Nature", "Ideology"]);
            for faction in session.factions() {
                table.add_row(vec![faction.name, faction.nature, faction.ideology]);
            }
            Ok(table.to_string())
        }
        "artefacts" => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Artefact", "Nature"]);
            for (artefact, unlocked) in session.artefacts_with_status() {
                if unlocked {
                    table.add_row(vec![artefact.name, artefact.nature]);
                } else {
                    table.add_row(vec!["Unknown", "?"]);
                }
            }
            Ok(table.to_string())
        }
        "creatures" => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Creature", "World", "Lore"]);
            for (creature, unlocked) in session.creatures_with_status() {
                if unlocked {
                    table.add_row(vec![creature.name, creature.world_id, creature.lore]);
                } else {
                    table.add_row(vec!["Classified", creature.world_id, "?"]);
                }
            }
            Ok(table.to_string())
        }
        "allies" => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Ally", "Role", "Lore"]);
            for (ally, met) in session.allies_with_status() {
                if met {
                    table.add_row(vec![ally.name, ally.role, ally.lore]);
                } else {
                    table.add_row(vec!["Unmet", "?", "?"]);
                }
            }
            Ok(table.to_string())
        }
        "quests" => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Quest", "World", "Objective"]);
            for quest in session.quests() {
                table.add_row(vec![quest.title, quest.world_id, quest.objective]);
            }
            Ok(table.to_string())
        }
        "upgrades" => {
            let upgrades = &session.progress().upgrades;
            let mut table = Table::new();
            table.set_header(vec!["Track", "Level", "Next cost"]);
            for (name, level) in [
                ("armor", upgrades.armor_integrity),
                ("channeling", upgrades.chronomatter_channeling),
                ("adaptation", upgrades.resonance_adaptation),
            ] {
                let cost = if economy::can_upgrade(level) {
                    format!("{} CM", economy::upgrade_cost(level))
                } else {
                    "MAX".to_string()
                };
                table.add_row(vec![name.to_string(), format!("{level}/10"), cost]);
            }
            Ok(table.to_string())
        }
        other => Err(format!(
            "unknown codex tab '{other}' (try: archives, laws, factions, artefacts, \
             creatures, allies, quests, upgrades)"
        )),
    }
}
