use crate::types::{PlayerEntry, PlayerLookupError};
use projection_engine::{PlayerCandidate, PlayerDirectory, PlayerId};
use std::collections::HashMap;
use tracing::{info, warn};

/// Player Registry - Maps player names to NBA player IDs
///
/// Built from the league player index fetched at startup. Name keys are
/// lowercased so every lookup is case-insensitive.
pub struct PlayerRegistry {
    /// Map from player ID to entry
    players_by_id: HashMap<PlayerId, PlayerEntry>,

    /// Map from lowercased full name to every player ID carrying it
    ids_by_name: HashMap<String, Vec<PlayerId>>,
}

impl PlayerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { players_by_id: HashMap::new(), ids_by_name: HashMap::new() }
    }

    /// Build a registry from the player index
    pub fn from_players(players: Vec<PlayerEntry>) -> Self {
        let mut registry = Self::new();
        registry.load_players(players);
        registry
    }

    /// Replace the registry contents with `players`
    pub fn load_players(&mut self, players: Vec<PlayerEntry>) {
        self.players_by_id.clear();
        self.ids_by_name.clear();

        for player in players {
            if self.players_by_id.contains_key(&player.player_id) {
                warn!("Duplicate player ID {} ({}), keeping first entry", player.player_id, player.name);
                continue;
            }

            self.ids_by_name.entry(player.name.to_lowercase()).or_default().push(player.player_id);
            self.players_by_id.insert(player.player_id, player);
        }

        let shared = self.ids_by_name.values().filter(|ids| ids.len() > 1).count();
        info!("Loaded {} players into registry ({} shared names)", self.players_by_id.len(), shared);
    }

    /// Get a player by ID
    pub fn get_by_id(&self, player_id: PlayerId) -> Result<&PlayerEntry, PlayerLookupError> {
        self.players_by_id.get(&player_id).ok_or(PlayerLookupError::InvalidPlayerId(player_id))
    }

    /// Get a player by full name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<&PlayerEntry, PlayerLookupError> {
        let ids = self
            .ids_by_name
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| PlayerLookupError::PlayerNotFound(name.to_string()))?;

        match ids.as_slice() {
            [id] => self.get_by_id(*id),
            _ => Err(PlayerLookupError::AmbiguousName(name.to_string())),
        }
    }

    /// Search for players by partial name match.
    ///
    /// Players on a current roster come first; within each group results are
    /// ordered by name, then ID.
    pub fn search_players(&self, query: &str) -> Vec<&PlayerEntry> {
        let query_lower = query.trim().to_lowercase();
        let mut matches: Vec<&PlayerEntry> = self
            .players_by_id
            .values()
            .filter(|player| player.name.to_lowercase().contains(&query_lower))
            .collect();

        matches.sort_by(|a, b| {
            b.is_active
                .cmp(&a.is_active)
                .then_with(|| a.name.cmp(&b.name))
                .then(a.player_id.cmp(&b.player_id))
        });
        matches
    }

    /// Number of players in the registry
    pub fn player_count(&self) -> usize {
        self.players_by_id.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.players_by_id.is_empty()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerDirectory for PlayerRegistry {
    fn find_exact(&self, name: &str) -> Option<PlayerCandidate> {
        self.get_by_name(name).ok().map(PlayerEntry::to_candidate)
    }

    fn search(&self, fragment: &str) -> Vec<PlayerCandidate> {
        self.search_players(fragment).into_iter().map(PlayerEntry::to_candidate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_players() -> Vec<PlayerEntry> {
        vec![
            PlayerEntry::new(2544, "LeBron James", true),
            PlayerEntry::new(1642355, "Bronny James", true),
            PlayerEntry::new(201939, "Stephen Curry", true),
            PlayerEntry::new(203110, "Draymond Green", true),
            PlayerEntry::new(1626145, "Tyus Jones", true),
            PlayerEntry::new(2200, "Marcus Williams", false),
            PlayerEntry::new(201173, "Marcus Williams", false),
        ]
    }

    #[test]
    fn test_registry_creation() {
        let registry = PlayerRegistry::from_players(create_test_players());

        assert_eq!(registry.player_count(), 7);
        assert!(!registry.is_empty());
        assert!(PlayerRegistry::new().is_empty());
    }

    #[test]
    fn test_exact_lookup_is_case_insensitive() {
        let registry = PlayerRegistry::from_players(create_test_players());

        let lebron = registry.get_by_name("lebron JAMES").unwrap();
        assert_eq!(lebron.player_id, 2544);

        let by_id = registry.get_by_id(2544).unwrap();
        assert_eq!(by_id.name, "LeBron James");

        assert_eq!(
            registry.find_exact("Stephen Curry"),
            Some(PlayerCandidate { name: "Stephen Curry".to_string(), id: 201939 })
        );
        assert_eq!(registry.find_exact("Steph Curry"), None);
    }

    #[test]
    fn test_shared_name_is_not_an_exact_match() {
        let registry = PlayerRegistry::from_players(create_test_players());

        assert_eq!(
            registry.get_by_name("Marcus Williams"),
            Err(PlayerLookupError::AmbiguousName("Marcus Williams".to_string()))
        );
        assert_eq!(registry.find_exact("Marcus Williams"), None);

        let ids: Vec<PlayerId> = registry.search("marcus williams").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2200, 201173]);
    }

    #[test]
    fn test_search_players() {
        let registry = PlayerRegistry::from_players(create_test_players());

        // Partial matches come back ordered by name
        let names: Vec<&str> = registry.search_players("james").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bronny James", "LeBron James"]);

        // Substring anywhere in the name
        let results = registry.search_players("mond");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Draymond Green");

        assert!(registry.search("zzz").is_empty());
    }

    #[test]
    fn test_search_lists_active_players_first() {
        let registry = PlayerRegistry::from_players(vec![
            PlayerEntry::new(1, "Aaron Green", false),
            PlayerEntry::new(2, "Danny Green", true),
            PlayerEntry::new(3, "AJ Green", true),
            PlayerEntry::new(4, "Draymond Green", true),
            PlayerEntry::new(5, "Danny Green", false),
        ]);

        let ids: Vec<PlayerId> = registry.search("green").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1, 5]);
    }

    #[test]
    fn test_missing_lookups() {
        let registry = PlayerRegistry::from_players(create_test_players());

        assert_eq!(registry.get_by_id(1), Err(PlayerLookupError::InvalidPlayerId(1)));
        assert_eq!(
            registry.get_by_name("Nobody").unwrap_err().to_string(),
            "Player 'Nobody' not found in registry"
        );
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let registry = PlayerRegistry::from_players(vec![
            PlayerEntry::new(7, "First Name", true),
            PlayerEntry::new(7, "Second Name", true),
        ]);

        assert_eq!(registry.player_count(), 1);
        assert_eq!(registry.get_by_id(7).unwrap().name, "First Name");
        assert!(registry.search("second").is_empty());
    }
}
