use projection_engine::{PlayerCandidate, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One player from the league's player index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// NBA person ID
    pub player_id: PlayerId,

    /// Display name (e.g., "LeBron James")
    pub name: String,

    /// Whether the player is on a current roster
    pub is_active: bool,
}

impl PlayerEntry {
    pub fn new(player_id: PlayerId, name: impl Into<String>, is_active: bool) -> Self {
        Self { player_id, name: name.into(), is_active }
    }

    /// Candidate form handed to the projection pipeline
    pub fn to_candidate(&self) -> PlayerCandidate {
        PlayerCandidate { name: self.name.clone(), id: self.player_id }
    }
}

/// Errors that can occur during player lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerLookupError {
    /// No player with this name in the registry
    PlayerNotFound(String),

    /// Unknown player ID
    InvalidPlayerId(PlayerId),

    /// More than one player shares this full name
    AmbiguousName(String),
}

impl fmt::Display for PlayerLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerLookupError::PlayerNotFound(name) => {
                write!(f, "Player '{name}' not found in registry")
            }
            PlayerLookupError::InvalidPlayerId(id) => {
                write!(f, "Invalid player ID: {id}")
            }
            PlayerLookupError::AmbiguousName(name) => {
                write!(f, "More than one player is named '{name}'")
            }
        }
    }
}

impl std::error::Error for PlayerLookupError {}
