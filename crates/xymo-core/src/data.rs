//! Declarative world data: the on-disk JSON shape and its conversion into a
//! validated [`World`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{Connection, ConnectionId, Item, ItemId, Location, LocationId};
use crate::error::WorldResult;
use crate::world::{World, WorldMeta};

/// The world shipped with the engine.
pub const BUNDLED_WORLD: &str = include_str!("../data/xymo.json");

/// Serialized form of a world: three id-keyed collections plus the initial
/// player state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldData {
    /// Display name of the world.
    pub name: String,
    /// Banner emitted when a session starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Where the player starts.
    pub start: LocationId,
    /// Items the player starts with.
    #[serde(default)]
    pub inventory: Vec<ItemId>,
    /// Locations keyed by id.
    pub locations: BTreeMap<LocationId, Location>,
    /// Connections keyed by id.
    #[serde(default)]
    pub connections: BTreeMap<ConnectionId, Connection>,
    /// Items keyed by id.
    #[serde(default)]
    pub items: BTreeMap<ItemId, Item>,
}

impl WorldData {
    /// Parse world data from JSON text without validating it.
    pub fn from_json(text: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build and validate the world.
    pub fn into_world(self) -> WorldResult<World> {
        let meta = WorldMeta {
            name: self.name,
            intro: self.intro,
        };
        let mut world = World::new(meta, self.start);

        for (id, mut location) in self.locations {
            location.id = id;
            world.add_location(location)?;
        }
        for (id, mut connection) in self.connections {
            connection.id = id;
            world.add_connection(connection)?;
        }
        for (id, mut item) in self.items {
            item.id = id;
            world.add_item(item)?;
        }
        for item in self.inventory {
            world.give_item(item)?;
        }

        world.validate()?;
        tracing::debug!(
            name = %world.meta.name,
            locations = world.locations().count(),
            connections = world.connections().count(),
            items = world.items().count(),
            "world loaded"
        );
        Ok(world)
    }
}

impl World {
    /// Parse and validate a world from JSON text.
    pub fn from_json(text: &str) -> WorldResult<Self> {
        WorldData::from_json(text)?.into_world()
    }

    /// Read, parse and validate a world file.
    pub fn load(path: &Path) -> WorldResult<Self> {
        let text = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "loading world file");
        Self::from_json(&text)
    }

    /// The world shipped with the engine.
    pub fn bundled() -> WorldResult<Self> {
        Self::from_json(BUNDLED_WORLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorldError;
    use crate::world::Holder;

    #[test]
    fn bundled_world_loads() {
        let world = World::bundled().unwrap();
        assert_eq!(world.meta.name, "Project XYMO");
        assert!(world.meta.intro.as_deref().unwrap().contains("TOP SECRET"));
        assert_eq!(world.current_location_id(), LocationId(1));
        assert!(world.inventory().is_empty());
        assert_eq!(world.locations().count(), 3);
        assert_eq!(world.connections().count(), 2);
        assert_eq!(world.items().count(), 2);
    }

    #[test]
    fn bundled_world_faces_match_listings() {
        let world = World::bundled().unwrap();
        for location in world.locations() {
            for &conn in &location.connections {
                assert!(world.face(conn, location.id).is_ok());
            }
        }
        for connection in world.connections() {
            for origin in connection.faces.keys() {
                let location = world.location(*origin).unwrap();
                assert!(location.connections.contains(&connection.id));
            }
        }
    }

    #[test]
    fn bundled_door_is_locked_from_vestibule_only() {
        let world = World::bundled().unwrap();
        assert!(world.face(ConnectionId(2), LocationId(2)).unwrap().locked);
        assert!(!world.face(ConnectionId(2), LocationId(3)).unwrap().locked);
    }

    #[test]
    fn interfacer_is_defined_but_unplaced() {
        let world = World::bundled().unwrap();
        assert_eq!(world.item(ItemId(0)).unwrap().label, "interfacer");
        assert_eq!(world.holder_of(ItemId(0)), None);
        assert_eq!(
            world.holder_of(ItemId(1)),
            Some(Holder::Location(LocationId(2)))
        );
    }

    #[test]
    fn ids_come_from_map_keys() {
        let world = World::bundled().unwrap();
        assert_eq!(world.location(LocationId(3)).unwrap().id, LocationId(3));
        assert_eq!(world.connection(ConnectionId(2)).unwrap().label, "door");
        assert_eq!(world.item(ItemId(1)).unwrap().id, ItemId(1));
    }

    #[test]
    fn starting_inventory_is_loaded() {
        let text = r#"{
            "name": "Pocket",
            "start": 1,
            "inventory": [5],
            "locations": { "1": { "label": "Room", "description": "Bare." } },
            "items": { "5": { "label": "coin", "description": "A coin." } }
        }"#;
        let world = World::from_json(text).unwrap();
        assert_eq!(world.inventory(), &[ItemId(5)]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = World::from_json("{ not json");
        assert!(matches!(result, Err(WorldError::Parse(_))));
    }

    #[test]
    fn dangling_destination_is_rejected() {
        let text = r#"{
            "name": "Dangling",
            "start": 1,
            "locations": { "1": { "label": "Room", "description": "", "connections": [1] } },
            "connections": { "1": { "label": "hole", "faces": {
                "1": { "description": "", "transition": "", "destination": 9 }
            } } }
        }"#;
        let err = World::from_json(text).unwrap_err();
        assert!(matches!(err, WorldError::Validation(_)));
        assert!(err.to_string().contains("location #9"));
    }

    #[test]
    fn unknown_solution_item_is_rejected() {
        let text = r#"{
            "name": "Keyless",
            "start": 1,
            "locations": {
                "1": { "label": "A", "description": "", "connections": [1] },
                "2": { "label": "B", "description": "", "connections": [1] }
            },
            "connections": { "1": { "label": "door", "faces": {
                "1": { "description": "", "transition": "", "destination": 2, "locked": true,
                       "solution": { "kind": "item", "item": 4, "reveal": "" } },
                "2": { "description": "", "transition": "", "destination": 1 }
            } } }
        }"#;
        let err = World::from_json(text).unwrap_err();
        assert!(err.to_string().contains("unlocked by unknown item #4"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("world.json");
        std::fs::write(&path, BUNDLED_WORLD).unwrap();
        let world = World::load(&path).unwrap();
        assert_eq!(world.meta.name, "Project XYMO");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = World::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(WorldError::Io(_))));
    }
}
