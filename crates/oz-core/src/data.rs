//! The standard content set shipped with the game.
//!
//! Pure data. Ids are stable and referenced by save files, so they must
//! never change; display text is fair game.

use crate::catalog::{
    Ally, Artefact, Catalog, Creature, Faction, LocationCategory, LocationVariant, NarrativeArc,
    Quest, TemporalLaw, World,
};

/// Build the standard catalog: eleven worlds on the ring plus the
/// supporting faction, artefact, creature, ally, quest, arc, and law tables.
pub fn standard() -> Catalog {
    Catalog {
        worlds: worlds(),
        factions: factions(),
        artefacts: artefacts(),
        creatures: creatures(),
        allies: allies(),
        quests: quests(),
        arcs: arcs(),
        laws: laws(),
    }
}

fn worlds() -> Vec<World> {
    vec![
        World {
            id: "virellion",
            name: "Virellion",
            description: "Onyzuka's cradle: a living nebula steeped in raw chronomatter.",
            palette: ["#4c1d95", "#0f766e", "#1e1b4b"],
            fragment_name: "Spiral of Virellion",
            order: 1,
            biome: "Nebula",
            category: LocationCategory::Nebula,
            variant: LocationVariant::Stable,
            key_points: &[
                "Fractured ring",
                "Spiral of Virellion",
                "Field of sensitive particles",
            ],
            ambiance: "Mystic, organic, the hero's birth.",
            history: Some(
                "Born of the Architects' first breath, Virellion is less a planet than a \
                 nursery of cosmic probability.",
            ),
        },
        World {
            id: "iridia",
            name: "Iridia",
            description: "A stellar prism where light decomposes into solid spectra.",
            palette: ["#d946ef", "#0ea5e9", "#ffffff"],
            fragment_name: "Prism of Iridia",
            order: 2,
            biome: "Liquid Light",
            category: LocationCategory::World,
            variant: LocationVariant::Stable,
            key_points: &["Chromatic cascades", "Glass forest", "Spectral echoes"],
            ambiance: "Dazzling, fragile, kaleidoscopic.",
            history: Some(
                "Iridia served the Architects as a focal lens, refining starlight before it \
                 was fed into the veins of Time.",
            ),
        },
        World {
            id: "kharon",
            name: "Kharon",
            description: "A titanic asteroid forge still ringing with the Architects' hammers.",
            palette: ["#44403c", "#ef4444", "#78350f"],
            fragment_name: "Forge of Kharon",
            order: 3,
            biome: "Metallic Forge",
            category: LocationCategory::World,
            variant: LocationVariant::Stable,
            key_points: &["Living forge", "Architect archives", "Chronomatter lava"],
            ambiance: "Industrial, sacred, brutal.",
            history: Some(
                "Once a dying white dwarf, Kharon was captured and remade into the industrial \
                 heart of creation.",
            ),
        },
        World {
            id: "mechanus",
            name: "Mechanus",
            description: "An endless planetary lattice of gears and pistons.",
            palette: ["#334155", "#f97316", "#0f172a"],
            fragment_name: "Pinion of Eternity",
            order: 4,
            biome: "Metallic Forge",
            category: LocationCategory::World,
            variant: LocationVariant::Stable,
            key_points: &["Central clock", "Copper vapors", "Iron labyrinth"],
            ambiance: "Mechanical, relentless, rhythmic.",
            history: Some(
                "The regulator of causality: every gear rotation on Mechanus defines one \
                 second of material reality.",
            ),
        },
        World {
            id: "elyndra",
            name: "Elyndra",
            description: "An infinite expanse of liquid light, a dream-ocean of lost wisdom.",
            palette: ["#0ea5e9", "#06b6d4", "#e0f2fe"],
            fragment_name: "Blade of Elyndra",
            order: 5,
            biome: "Liquid Light",
            category: LocationCategory::World,
            variant: LocationVariant::Stable,
            key_points: &["Sunken temple", "Floating isles", "Luminescent fauna"],
            ambiance: "Calm, hypnotic, spiritual.",
            history: Some(
                "Here memories dissolve into the waters of Aether to be purified by the \
                 currents of Time.",
            ),
        },
        World {
            id: "verdant-core",
            name: "Verdant Core",
            description: "A bio-mechanical jungle where chronomatter has taken root as vines.",
            palette: ["#166534", "#14532d", "#86efac"],
            fragment_name: "Chronic Seed of Life",
            order: 6,
            biome: "Nebula",
            category: LocationCategory::World,
            variant: LocationVariant::Stable,
            key_points: &["Tree of Ages", "Entropic pollution", "Filtered light"],
            ambiance: "Organic, suffocating, vibrant.",
            history: Some(
                "A growth experiment in which the Architects tried to cultivate timelines \
                 like living things.",
            ),
        },
        World {
            id: "noxaris",
            name: "Noxaris",
            description: "A prison of absolute darkness, a stellar graveyard devouring light.",
            palette: ["#171717", "#450a0a", "#000000"],
            fragment_name: "Darkness of Noxaris",
            order: 7,
            biome: "Total Darkness",
            category: LocationCategory::World,
            variant: LocationVariant::Fractured,
            key_points: &["Chronic shadows", "Fractal structures", "Absorbed light"],
            ambiance: "Oppressive, silent, entropic.",
            history: Some(
                "The Garden of Whispers, corrupted by Seraphon into a suffocating leaden ink.",
            ),
        },
        World {
            id: "tensor-reach",
            name: "Tensor Reach",
            description: "A space of pure computation where reality is probability vectors.",
            palette: ["#4f46e5", "#818cf8", "#312e81"],
            fragment_name: "Vector of Tensor",
            order: 8,
            biome: "Fractal Labyrinth",
            category: LocationCategory::World,
            variant: LocationVariant::Stable,
            key_points: &["Logic grid", "Floating data", "Scalar gravity"],
            ambiance: "Cold, abstract, mathematical.",
            history: Some(
                "The central processor of the Ring of Ages, computing world trajectories to \
                 avert temporal collisions.",
            ),
        },
        World {
            id: "solara-prime",
            name: "Solara Prime",
            description: "A citadel of crystal and gold nested in an artificial star.",
            palette: ["#facc15", "#ea580c", "#fbbf24"],
            fragment_name: "Crown of Solara",
            order: 9,
            biome: "Radiant City",
            category: LocationCategory::World,
            variant: LocationVariant::Stable,
            key_points: &["Stellar archives", "Golden towers", "Solar rings"],
            ambiance: "Majestic, divine, radiant.",
            history: Some(
                "The central beacon that broadcast the Synchrony signal keeping the \
                 multiverse stable.",
            ),
        },
        World {
            id: "aetheryon",
            name: "Aetheryon",
            description: "A fractal labyrinth where geometry twists and multiplies endlessly.",
            palette: ["#d946ef", "#6366f1", "#a855f7"],
            fragment_name: "Fractal of Aetheryon",
            order: 10,
            biome: "Fractal Labyrinth",
            category: LocationCategory::World,
            variant: LocationVariant::Restored,
            key_points: &["Living labyrinth", "Impossible geometry", "Variable gravity"],
            ambiance: "Psychedelic, disorienting, mathematical.",
            history: Some(
                "A logical prison built to contain paradoxes too dangerous for the rest of \
                 existence.",
            ),
        },
        World {
            id: "entropy-core",
            name: "Heart of Entropy",
            description: "The anchor of the Void: a hungry singularity marking the end of cycles.",
            palette: ["#000000", "#dc2626", "#1a1a1a"],
            fragment_name: "Entropic Heart",
            order: 11,
            biome: "Singularity",
            category: LocationCategory::Core,
            variant: LocationVariant::Fractured,
            key_points: &["Seraphon", "Entropy", "Temporal distortions"],
            ambiance: "Apocalyptic, unstable, final.",
            history: Some(
                "The final breaking point, where chronomatter dissolves back into pure \
                 nothingness.",
            ),
        },
    ]
}

fn factions() -> Vec<Faction> {
    vec![
        Faction {
            id: "guardians",
            name: "The Order of the Time Guardians",
            nature: "A caste of beings forged from chronomatter by the Stellar Architects.",
            ideology: "Preserve the balance of Time and keep Entropy from devouring the \
                       multiverse.",
            organisation: "The Absolute Guardian (Onyzuka), the vanished Primary Guardians, \
                           and the Minor Guardians (Echoes).",
            symbols: &["O", "feather", "spiral"],
            relations: "Hostile to the Children of Entropy. Wary of mortals.",
            lore: "Forged in the fires of Virellion, they are the last rampart against the \
                   nothing.",
        },
        Faction {
            id: "entropy_children",
            name: "The Children of Entropy",
            nature: "Creatures born of the entropic singularity.",
            ideology: "Everything must return to the void. Time itself is the anomaly.",
            organisation: "Seraphon (avatar), Living Fractals, Chronic Shadows.",
            symbols: &["bolt", "eclipse", "frost"],
            relations: "Sworn enemies of the Guardians. They devour unstable worlds.",
            lore: "They do not seek to rule, only to erase existence itself.",
        },
        Faction {
            id: "temporal_echoes",
            name: "The Temporal Echoes",
            nature: "Fragments of former Guardians caught between two realities.",
            ideology: "Varies with their corruption: pure, unstable, or corrupted.",
            organisation: "Wandering silhouettes inside the temporal rifts.",
            symbols: &["mist", "hourglass", "chain"],
            relations: "Allies or obstacles depending on their state of resonance.",
            lore: "They are the ghosts of those who failed before you.",
        },
        Faction {
            id: "stellar_architects",
            name: "The Stellar Architects",
            nature: "A vanished civilisation, creators of the Guardians.",
            ideology: "Time must be structured. Chaos must be contained.",
            organisation: "A perfect geometric hierarchy, now gone.",
            symbols: &["hex", "sun", "infinity"],
            relations: "Revered as creators. Their plans still guide Onyzuka.",
            lore: "They left the Codex behind as a guide before transcending matter.",
        },
    ]
}

fn artefacts() -> Vec<Artefact> {
    vec![
        Artefact {
            id: "codex",
            name: "The Codex of Ages",
            nature: "A living cosmic book holding the laws of Time.",
            functions: &[
                "Stabilises timelines",
                "Archives civilisations",
                "Enables the creation of Guardians",
            ],
            icon: "scroll",
            lore: "The nexus of all knowledge, its pages breathing to the rhythm of eons of \
                   chronomatter.",
        },
        Artefact {
            id: "rings",
            name: "The Rings of Time",
            nature: "Giant conscious portals, half metal, half energy.",
            functions: &["Temporal travel", "Guardian communication", "Memory storage"],
            icon: "spiral",
            lore: "Circular conduits linking the far nebulae to the central forges of the \
                   Architects.",
        },
        Artefact {
            id: "blades",
            name: "The Blades of Time",
            nature: "Onyzuka's mutable metal ribbons.",
            functions: &[
                "Cutting blades",
                "Energy whips",
                "Shields",
                "Thrusters",
                "Analysers",
            ],
            icon: "blade",
            lore: "Mutable blades forged in the absolute void to sever the creeping threads \
                   of entropy.",
        },
        Artefact {
            id: "heart",
            name: "The Entropic Heart",
            nature: "A living fragment of the singularity.",
            functions: &[
                "Devours chronomatter",
                "Corrupts Guardians",
                "Warps timelines",
            ],
            icon: "flame",
            lore: "A pulse of pure chaos threatening to grind the Codex and its worlds into \
                   stellar dust.",
        },
        Artefact {
            id: "forge",
            name: "The Living Forge",
            nature: "The place where Guardians are made.",
            functions: &[
                "Shapes chronomatter",
                "Imprints memories",
                "Forges armors",
            ],
            icon: "gear",
            lore: "The cosmic athanor where pure will meets malleable chronomatter to birth \
                   heroes.",
        },
    ]
}

fn creatures() -> Vec<Creature> {
    vec![
        Creature {
            id: "spirales_vivantes",
            name: "The Living Spirals",
            nature: "Sentient ribbons of energy.",
            behavior: "Curious, peaceful, drawn to Onyzuka.",
            world_id: "virellion",
            icon: "spiral",
            lore: "Born of the Architects' first breath, these filaments of liquid light \
                   weave reality between the indigo nebulae of Virellion.",
        },
        Creature {
            id: "chromatic_wisps",
            name: "The Chromatic Wisps",
            nature: "Specters of refracted light.",
            behavior: "Hypnotic, drifting near the crystals of Iridia.",
            world_id: "iridia",
            icon: "sparkle",
            lore: "Small pockets of awareness born of spectral decay, shifting hue with the \
                   emotions of whoever watches them.",
        },
        Creature {
            id: "golems_chrono",
            name: "The Chronomatter Golems",
            nature: "Constructs forged by the Architects.",
            behavior: "Protective, aggressive toward intruders.",
            world_id: "kharon",
            icon: "statue",
            lore: "Massive sentinels of obsidian and star-steel, the living memory of the \
                   forges of Kharon.",
        },
        Creature {
            id: "gear_grinders",
            name: "The Gear Grinders",
            nature: "Bio-mechanical parasites.",
            behavior: "Scavengers, feeding on rust and entropy.",
            world_id: "mechanus",
            icon: "gear",
            lore: "Tiny organic automata feeding on the friction between dimensions; without \
                   them the gears of Mechanus would seize under accumulated causality.",
        },
        Creature {
            id: "leviathans_lumiere",
            name: "The Leviathans of Light",
            nature: "Immense oceanic creatures of energy.",
            behavior: "Peaceful unless disturbed.",
            world_id: "elyndra",
            icon: "whale",
            lore: "Majestic keepers of the waters of Aether, colossi of liquid data archiving \
                   the emotions of every vanished civilisation.",
        },
        Creature {
            id: "root_nodes",
            name: "The Root-Nodes",
            nature: "Vegetal neural bundles.",
            behavior: "Stationary, transmitting impulses.",
            world_id: "verdant-core",
            icon: "sprout",
            lore: "The nervous system of the bio-mechanical jungle, each node a biological \
                   server storing the growth data of Verdant Core's timelines.",
        },
        Creature {
            id: "ombres_chroniques",
            name: "The Chronic Shadows",
            nature: "Light-absorbing entities.",
            behavior: "Silent pack hunters.",
            world_id: "noxaris",
            icon: "shadow",
            lore: "Moving scars upon reality, marking the very absence of Time where \
                   Seraphon erased existence.",
        },
        Creature {
            id: "void_stalkers",
            name: "The Void Stalkers",
            nature: "Conscious antimatter.",
            behavior: "Stealthy, absorbing chronomatter.",
            world_id: "noxaris",
            icon: "eye",
            lore: "Seraphon's eyes in the dark: blind to light, they track Onyzuka by the \
                   resonance of his Guardian armor.",
        },
        Creature {
            id: "vector_drones",
            name: "The Vector Drones",
            nature: "Pure geometric logic.",
            behavior: "Predictable yet implacable patrols.",
            world_id: "tensor-reach",
            icon: "hex",
            lore: "Extensions of the planetary processor, the physical form of the equations \
                   keeping gravity stable in this space of pure computation.",
        },
        Creature {
            id: "solariens",
            name: "The Solarians",
            nature: "Humanoid beings made of light.",
            behavior: "Wise, but distrustful of Guardians.",
            world_id: "solara-prime",
            icon: "sun",
            lore: "Having transcended the need for physical form, the Solarians live in \
                   total synchrony with the artificial sun of Solara Prime.",
        },
        Creature {
            id: "helios_sentries",
            name: "The Sentries of Helios",
            nature: "Solidified sunlight.",
            behavior: "Motionless until touched, then searing.",
            world_id: "solara-prime",
            icon: "flame",
            lore: "Fragments of eternal flame caged in crystal glass, guarding the stellar \
                   archives with a fervor that never gutters.",
        },
        Creature {
            id: "fractales_vivantes",
            name: "The Living Fractals",
            nature: "Self-replicating geometric creatures.",
            behavior: "Unpredictable, sometimes hostile.",
            world_id: "aetheryon",
            icon: "hex",
            lore: "Biological paradoxes born of the Labyrinth, each one every possible \
                   iteration of a single organism at once.",
        },
    ]
}

fn allies() -> Vec<Ally> {
    vec![
        Ally {
            id: "kalder",
            name: "Kalder",
            role: "Soul-Smith",
            icon: "wrench",
            lore: "Repairs Onyzuka's armor with devotion.",
            outcome: "Dies a hero to seal the Forge.",
        },
        Ally {
            id: "elyia",
            name: "Elya",
            role: "Spirit Guide",
            icon: "sparkle",
            lore: "Offers visions of possible futures.",
            outcome: "Becomes the new archivist of the Codex.",
        },
        Ally {
            id: "nox",
            name: "Nox",
            role: "Repentant Traitor",
            icon: "mask",
            lore: "A former servant of Entropy seeking redemption.",
            outcome: "A final sacrifice to protect Onyzuka.",
        },
        Ally {
            id: "solarion",
            name: "Solarion",
            role: "Solar Rival",
            icon: "swords",
            lore: "A proud warrior of Solara Prime.",
            outcome: "Yields the Crown after a memorable duel.",
        },
        Ally {
            id: "aeth",
            name: "Aeth",
            role: "Pure Logic",
            icon: "puzzle",
            lore: "A mathematical entity of the Labyrinth.",
            outcome: "A temporary fusion to solve the Final Paradox.",
        },
        Ally {
            id: "lyria",
            name: "Lyria",
            role: "The Spark",
            icon: "heart",
            lore: "The first human Onyzuka ever met.",
            outcome: "Teaches him the weight of transmission.",
        },
    ]
}

fn quests() -> Vec<Quest> {
    vec![
        Quest {
            id: "q1",
            title: "Spiral of Awakening",
            world_id: "virellion",
            description: "First confrontation with Seraphon.",
            objective: "Recover the first fragment.",
            outcome: "Onyzuka's awakening is complete.",
        },
        Quest {
            id: "q2",
            title: "The Forge of the Past",
            world_id: "kharon",
            description: "Repairing the metal ribbons.",
            objective: "Uncover Seraphon's secret.",
            outcome: "The Arsenal is stabilised.",
        },
        Quest {
            id: "q3",
            title: "The Ocean of Visions",
            world_id: "elyndra",
            description: "A spiritual trial in the waters of Aether.",
            objective: "Obtain the Blade of Elyndra.",
            outcome: "The vision of the future clears.",
        },
        Quest {
            id: "q4",
            title: "The World Without Light",
            world_id: "noxaris",
            description: "Crossing total darkness.",
            objective: "Survive Nox's betrayal.",
            outcome: "The Shadow fragment is secured.",
        },
        Quest {
            id: "q5",
            title: "The Solar Duel",
            world_id: "solara-prime",
            description: "A ritual combat for sovereignty.",
            objective: "Win the Crown of Solara.",
            outcome: "Solarion acknowledges your authority.",
        },
        Quest {
            id: "q6",
            title: "The Fractal Labyrinth",
            world_id: "aetheryon",
            description: "A trial of pure logic.",
            objective: "Extract the Fractal of Aetheryon.",
            outcome: "The geometry of Time is understood.",
        },
        Quest {
            id: "q7",
            title: "The Final Judgment",
            world_id: "entropy-core",
            description: "The last battle at the heart of the void.",
            objective: "Defeat Seraphon for good.",
            outcome: "The Codex is fully restored.",
        },
    ]
}

fn arcs() -> Vec<NarrativeArc> {
    vec![
        NarrativeArc {
            id: "main",
            title: "The Rebuilding of the Codex",
            stages: &[
                "Awakening",
                "Broken Codex",
                "Journey of the Seven Worlds",
                "Confrontation",
                "Fusion",
                "Rebirth",
            ],
        },
        NarrativeArc {
            id: "villain",
            title: "The Fall of Seraphon",
            stages: &[
                "Corruption",
                "Manipulation",
                "Destruction",
                "Absorption",
                "Final Battle",
                "Annihilation",
            ],
        },
        NarrativeArc {
            id: "emotional",
            title: "From Solitude to Transmission",
            stages: &[
                "Isolation",
                "Meeting (Lyria)",
                "Legacy",
                "Doubt",
                "Acceptance",
                "New Order",
            ],
        },
        NarrativeArc {
            id: "cosmic",
            title: "The Sickness of Time",
            stages: &[
                "Distortions",
                "Repetitions",
                "Unstable Echoes",
                "Collapse",
                "Healing",
            ],
        },
    ]
}

fn laws() -> Vec<TemporalLaw> {
    vec![
        TemporalLaw {
            id: "L01",
            title: "The Law of Conservation",
            description: "Chronomatter cannot be created or destroyed, only redirected from \
                          the maw of Entropy.",
        },
        TemporalLaw {
            id: "L02",
            title: "The Ribbon Directive",
            description: "The metal ribbons are not tools but extensions of the Guardian's \
                          soul. Respect their weight.",
        },
        TemporalLaw {
            id: "L03",
            title: "The Singularity Clause",
            description: "When two timelines collide, only the one with the strongest \
                          resonance shall endure.",
        },
        TemporalLaw {
            id: "L04",
            title: "The Echo Protocol",
            description: "A fallen Guardian is never truly gone. Their memories persist as \
                          vibrations in the Aether.",
        },
        TemporalLaw {
            id: "L05",
            title: "The First Axiom",
            description: "Silence is the precursor to the Void. Keep the universe singing.",
        },
    ]
}
