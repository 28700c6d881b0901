//! Character entity - the stat block a skill check reads from

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, UserId};
use crate::value_objects::Characteristics;

/// A player's character.
///
/// Created by the character-creation workflow; skill checks only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    /// The user who owns this character. Checks are scoped to this owner.
    pub owner: UserId,
    pub name: String,
    pub characteristics: Characteristics,
}

impl Character {
    pub fn new(owner: UserId, name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            owner,
            name: name.into(),
            characteristics: Characteristics::default(),
        }
    }

    pub fn with_characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics = characteristics;
        self
    }
}
