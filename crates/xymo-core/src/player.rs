//! Player state management.

use serde::{Deserialize, Serialize};

use crate::entity::{ItemId, LocationId};

/// Where the player is and what they carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current location.
    pub location: LocationId,
    /// Items in storage, in the order they were stowed.
    pub inventory: Vec<ItemId>,
}

impl PlayerState {
    /// Create a player standing at `location` with empty storage.
    pub fn new(location: LocationId) -> Self {
        Self {
            location,
            inventory: Vec::new(),
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item_id: ItemId) -> bool {
        self.inventory.contains(&item_id)
    }

    /// Add an item to inventory.
    pub fn add_item(&mut self, item_id: ItemId) {
        if !self.inventory.contains(&item_id) {
            self.inventory.push(item_id);
        }
    }

    /// Remove an item from inventory.
    pub fn remove_item(&mut self, item_id: ItemId) -> bool {
        if let Some(pos) = self.inventory.iter().position(|&id| id == item_id) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }
}
