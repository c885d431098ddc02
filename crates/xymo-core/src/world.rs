use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{
    Connection, ConnectionFace, ConnectionId, Item, ItemId, Location, LocationId, UnlockSolution,
};
use crate::error::{WorldError, WorldResult};
use crate::player::PlayerState;

/// Metadata about the world itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Display name of the world.
    pub name: String,
    /// Banner emitted when a session starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
}

impl WorldMeta {
    /// Create metadata with no intro banner.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            intro: None,
        }
    }

    /// Builder: set the intro banner.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }
}

/// Something that can hold an item: a location's floor or the player's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holder {
    /// The item set of a location.
    Location(LocationId),
    /// The player's inventory.
    Inventory,
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Location(id) => write!(f, "{id}"),
            Self::Inventory => write!(f, "storage"),
        }
    }
}

/// The central world model. Owns every location, connection and item, plus
/// the player's dynamic state.
#[derive(Debug, Clone)]
pub struct World {
    /// Metadata about the world.
    pub meta: WorldMeta,
    locations: BTreeMap<LocationId, Location>,
    connections: BTreeMap<ConnectionId, Connection>,
    items: BTreeMap<ItemId, Item>,
    player: PlayerState,
}

impl World {
    /// Create an empty world with the player standing at `start`.
    ///
    /// `start` is checked by [`World::validate`], not here, so locations can
    /// be added afterwards.
    pub fn new(meta: WorldMeta, start: LocationId) -> Self {
        Self {
            meta,
            locations: BTreeMap::new(),
            connections: BTreeMap::new(),
            items: BTreeMap::new(),
            player: PlayerState::new(start),
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a location. Rejects a duplicate id.
    pub fn add_location(&mut self, location: Location) -> WorldResult<LocationId> {
        let id = location.id;
        if self.locations.contains_key(&id) {
            return Err(WorldError::DuplicateId(id.to_string()));
        }
        self.locations.insert(id, location);
        Ok(id)
    }

    /// Add a connection. Rejects a duplicate id.
    pub fn add_connection(&mut self, connection: Connection) -> WorldResult<ConnectionId> {
        let id = connection.id;
        if self.connections.contains_key(&id) {
            return Err(WorldError::DuplicateId(id.to_string()));
        }
        self.connections.insert(id, connection);
        Ok(id)
    }

    /// Add an item definition. Placement is done through a location's
    /// `items` or [`World::give_item`].
    pub fn add_item(&mut self, item: Item) -> WorldResult<ItemId> {
        let id = item.id;
        if self.items.contains_key(&id) {
            return Err(WorldError::DuplicateId(id.to_string()));
        }
        self.items.insert(id, item);
        Ok(id)
    }

    /// Put an item straight into the player's inventory.
    pub fn give_item(&mut self, item: ItemId) -> WorldResult<()> {
        self.item(item)?;
        self.player.add_item(item);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Get a location by id.
    pub fn location(&self, id: LocationId) -> WorldResult<&Location> {
        self.locations
            .get(&id)
            .ok_or(WorldError::LocationNotFound(id))
    }

    /// Get a connection by id.
    pub fn connection(&self, id: ConnectionId) -> WorldResult<&Connection> {
        self.connections
            .get(&id)
            .ok_or(WorldError::ConnectionNotFound(id))
    }

    /// Get an item by id.
    pub fn item(&self, id: ItemId) -> WorldResult<&Item> {
        self.items.get(&id).ok_or(WorldError::ItemNotFound(id))
    }

    /// Get the face of `connection` seen from `origin`.
    pub fn face(&self, connection: ConnectionId, origin: LocationId) -> WorldResult<&ConnectionFace> {
        self.connection(connection)?
            .face(origin)
            .ok_or(WorldError::FaceNotFound { connection, origin })
    }

    /// Id of the location the player stands in.
    pub fn current_location_id(&self) -> LocationId {
        self.player.location
    }

    /// The location the player stands in.
    pub fn current_location(&self) -> WorldResult<&Location> {
        self.location(self.player.location)
    }

    /// Items lying at a location, in display order.
    pub fn items_at(&self, id: LocationId) -> WorldResult<&[ItemId]> {
        Ok(&self.location(id)?.items)
    }

    /// Items in the player's storage, in stow order.
    pub fn inventory(&self) -> &[ItemId] {
        &self.player.inventory
    }

    /// The player's dynamic state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// All locations, ordered by id.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// All connections, ordered by id.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// All items, ordered by id.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Where an item currently is, or `None` if nobody holds it.
    pub fn holder_of(&self, item: ItemId) -> Option<Holder> {
        if self.player.has_item(item) {
            return Some(Holder::Inventory);
        }
        self.locations
            .values()
            .find(|loc| loc.items.contains(&item))
            .map(|loc| Holder::Location(loc.id))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Move the player. Reachability is the caller's concern; only
    /// existence is checked.
    pub fn move_to(&mut self, id: LocationId) -> WorldResult<()> {
        self.location(id)?;
        tracing::debug!(from = %self.player.location, to = %id, "player moved");
        self.player.location = id;
        Ok(())
    }

    /// Move an item from one holder to another, appending at the destination.
    pub fn transfer_item(&mut self, item: ItemId, from: Holder, to: Holder) -> WorldResult<()> {
        self.item(item)?;
        if let Holder::Location(id) = to {
            self.location(id)?;
        }

        match from {
            Holder::Inventory => {
                if !self.player.remove_item(item) {
                    return Err(WorldError::ItemNotHeld { item, holder: from });
                }
            }
            Holder::Location(id) => {
                let location = self
                    .locations
                    .get_mut(&id)
                    .ok_or(WorldError::LocationNotFound(id))?;
                let Some(pos) = location.items.iter().position(|&i| i == item) else {
                    return Err(WorldError::ItemNotHeld { item, holder: from });
                };
                location.items.remove(pos);
            }
        }

        match to {
            Holder::Inventory => self.player.add_item(item),
            Holder::Location(id) => {
                if let Some(location) = self.locations.get_mut(&id) {
                    location.items.push(item);
                }
            }
        }

        tracing::debug!(%item, %from, %to, "item transferred");
        Ok(())
    }

    /// Set the lock flag of one face. The opposite face is left untouched.
    pub fn set_connection_locked(
        &mut self,
        connection: ConnectionId,
        origin: LocationId,
        locked: bool,
    ) -> WorldResult<()> {
        let face = self
            .connections
            .get_mut(&connection)
            .ok_or(WorldError::ConnectionNotFound(connection))?
            .faces
            .get_mut(&origin)
            .ok_or(WorldError::FaceNotFound { connection, origin })?;
        face.locked = locked;
        tracing::debug!(%connection, %origin, locked, "lock state changed");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check that the world data is internally consistent.
    pub fn validate(&self) -> WorldResult<()> {
        self.location(self.player.location)
            .map_err(|_| invalid(format!("start {} does not exist", self.player.location)))?;

        let mut holders: HashMap<ItemId, Holder> = HashMap::new();
        let mut claim = |item: ItemId, holder: Holder| -> WorldResult<()> {
            if !self.items.contains_key(&item) {
                return Err(invalid(format!("{holder} holds unknown {item}")));
            }
            if let Some(previous) = holders.insert(item, holder) {
                return Err(invalid(format!(
                    "{item} is held by both {previous} and {holder}"
                )));
            }
            Ok(())
        };

        for &item in &self.player.inventory {
            claim(item, Holder::Inventory)?;
        }

        for location in self.locations.values() {
            for &item in &location.items {
                claim(item, Holder::Location(location.id))?;
            }
            for &conn_id in &location.connections {
                let connection = self.connections.get(&conn_id).ok_or_else(|| {
                    invalid(format!("{} lists unknown {conn_id}", location.id))
                })?;
                if connection.face(location.id).is_none() {
                    return Err(invalid(format!(
                        "{} lists {conn_id} ({}) but it has no face there",
                        location.id, connection.label
                    )));
                }
            }
        }

        for connection in self.connections.values() {
            for (origin, face) in &connection.faces {
                let location = self.locations.get(origin).ok_or_else(|| {
                    invalid(format!("{} has a face at unknown {origin}", connection.id))
                })?;
                if !location.connections.contains(&connection.id) {
                    return Err(invalid(format!(
                        "{} ({}) has a face at {origin} but that location does not list it",
                        connection.id, connection.label
                    )));
                }
                if !self.locations.contains_key(&face.destination) {
                    return Err(invalid(format!(
                        "{} ({}) leads to unknown {}",
                        connection.id, connection.label, face.destination
                    )));
                }
                if let Some(UnlockSolution::Item { item, .. }) = &face.solution {
                    if !self.items.contains_key(item) {
                        return Err(invalid(format!(
                            "{} ({}) is unlocked by unknown {item}",
                            connection.id, connection.label
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> WorldError {
    WorldError::Validation(message)
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    /// Two connected rooms with `count` items lying in the first one.
    fn shelf_world(count: u32) -> World {
        let mut first = Location::new(LocationId(1), "Store", "").with_connection(ConnectionId(1));
        for i in 0..count {
            first = first.with_item(ItemId(i));
        }
        let mut world = World::new(WorldMeta::new("Shelves"), LocationId(1));
        world.add_location(first).unwrap();
        world
            .add_location(Location::new(LocationId(2), "Annex", "").with_connection(ConnectionId(1)))
            .unwrap();
        world
            .add_connection(
                Connection::new(ConnectionId(1), "arch")
                    .with_face(LocationId(1), ConnectionFace::new("", "", LocationId(2)))
                    .with_face(LocationId(2), ConnectionFace::new("", "", LocationId(1))),
            )
            .unwrap();
        for i in 0..count {
            world.add_item(Item::new(ItemId(i), format!("thing{i}"), "")).unwrap();
        }
        world
    }

    fn holder(choice: u8) -> Holder {
        match choice {
            0 => Holder::Inventory,
            1 => Holder::Location(LocationId(1)),
            _ => Holder::Location(LocationId(2)),
        }
    }

    proptest! {
        #[test]
        fn transfers_keep_each_item_in_exactly_one_place(
            moves in prop::collection::vec((0u32..4, 0u8..3), 0..40)
        ) {
            let mut world = shelf_world(4);
            for (item, target) in moves {
                let item = ItemId(item);
                let from = world.holder_of(item).unwrap();
                let to = holder(target);
                if from == to {
                    continue;
                }
                world.transfer_item(item, from, to).unwrap();
                prop_assert_eq!(world.holder_of(item), Some(to));
            }
            world.validate().unwrap();
            for i in 0..4 {
                prop_assert!(world.holder_of(ItemId(i)).is_some());
            }
        }

        #[test]
        fn stow_then_drop_restores_partition(item in 0u32..4, room in 1u32..3) {
            let mut world = shelf_world(4);
            let room = Holder::Location(LocationId(room));
            let item = ItemId(item);
            let origin = world.holder_of(item).unwrap();
            if origin != room {
                world.transfer_item(item, origin, room).unwrap();
            }
            let before: Vec<_> = (0..4).map(|i| world.holder_of(ItemId(i))).collect();

            world.transfer_item(item, room, Holder::Inventory).unwrap();
            world.transfer_item(item, Holder::Inventory, room).unwrap();

            let after: Vec<_> = (0..4).map(|i| world.holder_of(ItemId(i))).collect();
            prop_assert_eq!(before, after);
        }
    }
}
