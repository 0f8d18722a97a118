//! Example Game - A small simulation demonstrating synergy_core
//!
//! This game shows:
//! - Loading a content pack (items + synergies) from TOML
//! - Players picking up, dropping, wielding and holstering items
//! - Synergies switching on and off as inventories change
//! - Stat totals from active synergies
//!
//! Usage: `example_game [seed] [turns]`. Set `SYNERGY_PACK` to load a
//! different content pack from disk.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::Path;
use synergy_core::{
    explain, load_content, parse_content, ContentPack, InventoryTable, ItemCategory, ItemId,
    MatchReport, ParticipantId, Roster, StatKind, SynergyQueries, SynergyRegistry,
    SynergyTracker, SynergyTransition, TransitionKind, TransitionListener,
};

const DEFAULT_PACK: &str = include_str!("../content/example_pack.toml");

/// Item that acts as the wildcard substitution token
const WILDCARD_ITEM: &str = "lichs_eye_bullets";

const DEFAULT_SEED: u64 = 7;
const DEFAULT_TURNS: u32 = 60;

/// Base values the summary reports stats against
const BASE_STATS: [(StatKind, f64); 3] = [
    (StatKind::Accuracy, 1.0),
    (StatKind::MovementSpeed, 7.0),
    (StatKind::ThrownGunDamage, 1.0),
];

/// What a player does on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    PickUp(ItemId),
    Drop(ItemId),
    Wield(ItemId),
    Holster(ItemId),
}

/// Collects transition messages for the end-of-run recap
#[derive(Default)]
struct MessageLog {
    messages: Vec<String>,
}

impl TransitionListener for MessageLog {
    fn on_transition(&mut self, registry: &SynergyRegistry, transition: &SynergyTransition) {
        let Some(def) = registry.get(transition.index) else {
            return;
        };
        let message = match transition.kind {
            TransitionKind::Activated if def.suppress_presentation_effect() => {
                format!("{} quietly completed {}", transition.participant, def.name())
            }
            TransitionKind::Activated => {
                format!("{} completed {}!", transition.participant, def.name())
            }
            TransitionKind::Deactivated => {
                format!("{} lost {}", transition.participant, def.name())
            }
        };
        log::info!("{}", message);
        self.messages.push(message);
    }
}

/// Main game state
struct GameState {
    registry: SynergyRegistry,
    items: Vec<(ItemId, ItemCategory)>,
    wildcard_item: Option<ItemId>,
    inventory: InventoryTable,
    roster: Roster,
    players: Vec<ParticipantId>,
    tracker: SynergyTracker,
    log: MessageLog,
    rng: ChaCha8Rng,
    turn: u32,
}

impl GameState {
    fn new(pack: &ContentPack, seed: u64) -> Self {
        let mut registry = SynergyRegistry::new();
        registry.initialize();
        let (_catalog, indices) = pack.install(&mut registry);

        let items = pack
            .items
            .iter()
            .filter(|item| item.category.is_known())
            .map(|item| (item.id, item.category))
            .collect();
        let wildcard_item = pack
            .items
            .iter()
            .find(|item| item.console_id == WILDCARD_ITEM)
            .map(|item| item.id);

        // Two players and one spectator; the host tracks every synergy for everyone
        let players = vec![ParticipantId(0), ParticipantId(1)];
        let mut roster = Roster::new();
        for player in &players {
            roster.join(*player, false);
            roster.set_candidates(*player, indices.clone());
        }
        roster.join(ParticipantId(2), true);
        roster.set_candidates(ParticipantId(2), indices);

        GameState {
            registry,
            items,
            wildcard_item,
            inventory: InventoryTable::new(),
            roster,
            players,
            tracker: SynergyTracker::new(),
            log: MessageLog::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            turn: 0,
        }
    }

    fn random_item(&mut self) -> Option<ItemId> {
        self.items.choose(&mut self.rng).map(|(id, _)| *id)
    }

    fn is_tool(&self, id: ItemId) -> bool {
        self.items
            .iter()
            .any(|(item, category)| *item == id && *category == ItemCategory::Tool)
    }

    fn random_action(&mut self, player: ParticipantId) -> Option<Action> {
        let (owned, equipped): (Vec<ItemId>, Vec<ItemId>) = match self.inventory.get(player) {
            Some(inv) => (
                inv.owned.iter().copied().collect(),
                inv.equipped.iter().copied().collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        let holstered: Vec<ItemId> = owned
            .iter()
            .copied()
            .filter(|id| self.is_tool(*id) && !equipped.contains(id))
            .collect();

        let action = match self.rng.gen_range(0..10) {
            0..=3 => None,
            4..=5 => owned.choose(&mut self.rng).map(|id| Action::Drop(*id)),
            6..=7 => holstered.choose(&mut self.rng).map(|id| Action::Wield(*id)),
            _ => equipped.choose(&mut self.rng).map(|id| Action::Holster(*id)),
        };
        match action {
            Some(action) => Some(action),
            None => self.random_item().map(Action::PickUp),
        }
    }

    fn apply(&mut self, player: ParticipantId, action: Action) {
        let wildcard = self.wildcard_item;
        let inv = self.inventory.entry(player);
        match action {
            Action::PickUp(id) => {
                if Some(id) == wildcard && !inv.owned.contains(&id) {
                    inv.wildcard_tokens += 1;
                }
                inv.add(id);
            }
            Action::Drop(id) => {
                if Some(id) == wildcard && inv.owned.contains(&id) {
                    inv.wildcard_tokens = inv.wildcard_tokens.saturating_sub(1);
                }
                inv.remove(id);
            }
            Action::Wield(id) => {
                inv.equip(id);
            }
            Action::Holster(id) => inv.unequip(id),
        }
        log::debug!("turn {}: {} {:?}", self.turn, player, action);
    }

    /// Play one turn for every player
    fn step(&mut self) {
        self.turn += 1;
        for player in self.players.clone() {
            if let Some(action) = self.random_action(player) {
                self.apply(player, action);
                self.tracker.on_inventory_changed(
                    &self.registry,
                    &self.inventory,
                    &self.roster,
                    player,
                    &mut self.log,
                );
            }
        }
    }

    fn summary(&self) -> RunSummary {
        let queries = SynergyQueries::new(&self.registry, &self.inventory, &self.roster);
        let players = self
            .players
            .iter()
            .map(|player| {
                let totals = self.tracker.stat_totals(&self.registry, *player);
                PlayerSummary {
                    player: *player,
                    items: self
                        .inventory
                        .get(*player)
                        .map(|inv| inv.owned.iter().copied().collect())
                        .unwrap_or_default(),
                    stats: BASE_STATS
                        .iter()
                        .map(|(stat, base)| (*stat, totals.compute(*stat, *base)))
                        .collect(),
                    synergies: self
                        .registry
                        .iter()
                        .map(|(_, def)| SynergyStatus {
                            name: def.name().to_string(),
                            report: explain(def, &self.inventory, *player),
                        })
                        .collect(),
                }
            })
            .collect();

        RunSummary {
            turns: self.turn,
            active_counts: self
                .registry
                .iter()
                .map(|(_, def)| (def.name().to_string(), queries.count_active(def.name())))
                .collect(),
            players,
            recap: self.log.messages.clone(),
        }
    }
}

#[derive(Serialize)]
struct SynergyStatus {
    name: String,
    report: MatchReport,
}

#[derive(Serialize)]
struct PlayerSummary {
    player: ParticipantId,
    items: Vec<ItemId>,
    stats: Vec<(StatKind, f64)>,
    synergies: Vec<SynergyStatus>,
}

#[derive(Serialize)]
struct RunSummary {
    turns: u32,
    active_counts: Vec<(String, usize)>,
    players: Vec<PlayerSummary>,
    recap: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let turns = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TURNS);

    let pack = match std::env::var("SYNERGY_PACK") {
        Ok(path) => load_content(Path::new(&path))?,
        Err(_) => parse_content(DEFAULT_PACK)?,
    };

    let mut game = GameState::new(&pack, seed);
    log::info!(
        "Simulating {} turns with seed {} ({} synergies)",
        turns,
        seed,
        game.registry.len()
    );
    for _ in 0..turns {
        game.step();
    }

    println!("{}", serde_json::to_string_pretty(&game.summary())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pack_loads() {
        let pack = parse_content(DEFAULT_PACK).unwrap();
        let game = GameState::new(&pack, DEFAULT_SEED);
        assert_eq!(game.registry.len(), 3);
        assert!(game.wildcard_item.is_some());
        for (_, def) in game.registry.iter() {
            assert!(def.can_ever_be_satisfied(), "{} unsatisfiable", def.name());
        }
    }

    #[test]
    fn test_wildcard_pickup_grants_token() {
        let pack = parse_content(DEFAULT_PACK).unwrap();
        let mut game = GameState::new(&pack, DEFAULT_SEED);
        let token = game.wildcard_item.unwrap();
        let p = ParticipantId(0);

        game.apply(p, Action::PickUp(token));
        game.apply(p, Action::PickUp(token));
        assert_eq!(game.inventory.get(p).unwrap().wildcard_tokens, 1);

        game.apply(p, Action::Drop(token));
        assert_eq!(game.inventory.get(p).unwrap().wildcard_tokens, 0);
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let pack = parse_content(DEFAULT_PACK).unwrap();
        let mut a = GameState::new(&pack, 99);
        let mut b = GameState::new(&pack, 99);
        for _ in 0..25 {
            a.step();
            b.step();
        }
        assert_eq!(a.log.messages, b.log.messages);
    }
}
