//! Label resolution against an ordered scope of nearby entities.

use xymo_core::{ConnectionId, ItemId, World, WorldResult};

/// A resolvable world entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    /// A connection of the current location.
    Connection(ConnectionId),
    /// An item on the floor or in storage.
    Item(ItemId),
}

/// One part of a resolver scope. Parts are searched in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Connections of the current location, in listing order.
    Connections,
    /// Items on the floor of the current location.
    RoomItems,
    /// Items in the player's storage.
    Inventory,
}

/// Assemble the ordered candidate list for the given scope parts.
pub fn candidates(world: &World, scopes: &[Scope]) -> WorldResult<Vec<EntityRef>> {
    let location = world.current_location()?;
    let mut out = Vec::new();
    for scope in scopes {
        match scope {
            Scope::Connections => out.extend(
                location
                    .connections
                    .iter()
                    .map(|&id| EntityRef::Connection(id)),
            ),
            Scope::RoomItems => out.extend(location.items.iter().map(|&id| EntityRef::Item(id))),
            Scope::Inventory => out.extend(world.inventory().iter().map(|&id| EntityRef::Item(id))),
        }
    }
    Ok(out)
}

/// The label players type for an entity.
pub fn label_of(world: &World, entity: EntityRef) -> WorldResult<&str> {
    match entity {
        EntityRef::Connection(id) => Ok(&world.connection(id)?.label),
        EntityRef::Item(id) => Ok(&world.item(id)?.label),
    }
}

/// Find the first candidate whose label equals `label`, ignoring case.
///
/// No partial or fuzzy matching. `None` is an ordinary outcome.
pub fn resolve_by_label(world: &World, label: &str, candidates: &[EntityRef]) -> Option<EntityRef> {
    let wanted = label.to_lowercase();
    candidates.iter().copied().find(|&candidate| {
        label_of(world, candidate).is_ok_and(|name| name.to_lowercase() == wanted)
    })
}

/// Assemble the scope and resolve `label` in one step.
pub fn resolve_in(world: &World, label: &str, scopes: &[Scope]) -> WorldResult<Option<EntityRef>> {
    let candidates = candidates(world, scopes)?;
    Ok(resolve_by_label(world, label, &candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use xymo_core::{
        Connection, ConnectionFace, Holder, Item, Location, LocationId, World, WorldMeta,
    };

    /// A room whose hatch shares its label with an item on the floor.
    fn test_world() -> World {
        let mut world = World::new(WorldMeta::new("Test"), LocationId(1));
        world
            .add_location(
                Location::new(LocationId(1), "Bay", "A loading bay.")
                    .with_connection(ConnectionId(1))
                    .with_connection(ConnectionId(2))
                    .with_item(ItemId(1))
                    .with_item(ItemId(2)),
            )
            .unwrap();
        world
            .add_location(
                Location::new(LocationId(2), "Deck", "")
                    .with_connection(ConnectionId(1))
                    .with_connection(ConnectionId(2)),
            )
            .unwrap();
        for (id, label) in [(1, "hatch"), (2, "ramp")] {
            world
                .add_connection(
                    Connection::new(ConnectionId(id), label)
                        .with_face(LocationId(1), ConnectionFace::new("", "", LocationId(2)))
                        .with_face(LocationId(2), ConnectionFace::new("", "", LocationId(1))),
                )
                .unwrap();
        }
        world
            .add_item(Item::new(ItemId(1), "hatch", "A hatch-shaped plate."))
            .unwrap();
        world
            .add_item(Item::new(ItemId(2), "Cube", "A cube."))
            .unwrap();
        world.add_item(Item::new(ItemId(3), "wrench", "")).unwrap();
        world.give_item(ItemId(3)).unwrap();
        world
    }

    #[test]
    fn candidates_follow_scope_order() {
        let world = test_world();
        let list = candidates(&world, &[Scope::Inventory, Scope::Connections]).unwrap();
        assert_eq!(
            list,
            vec![
                EntityRef::Item(ItemId(3)),
                EntityRef::Connection(ConnectionId(1)),
                EntityRef::Connection(ConnectionId(2)),
            ]
        );
    }

    #[test]
    fn exact_match() {
        let world = test_world();
        let found = resolve_in(&world, "ramp", &[Scope::Connections]).unwrap();
        assert_eq!(found, Some(EntityRef::Connection(ConnectionId(2))));
    }

    #[test]
    fn case_insensitive_match() {
        let world = test_world();
        for label in ["CUBE", "cube", "Cube"] {
            let found = resolve_in(&world, label, &[Scope::RoomItems]).unwrap();
            assert_eq!(found, Some(EntityRef::Item(ItemId(2))));
        }
    }

    #[test]
    fn first_scope_wins_on_collision() {
        let world = test_world();
        let found = resolve_in(&world, "hatch", &[Scope::Connections, Scope::RoomItems]).unwrap();
        assert_eq!(found, Some(EntityRef::Connection(ConnectionId(1))));

        let found = resolve_in(&world, "hatch", &[Scope::RoomItems, Scope::Connections]).unwrap();
        assert_eq!(found, Some(EntityRef::Item(ItemId(1))));
    }

    #[test]
    fn no_partial_match() {
        let world = test_world();
        assert_eq!(resolve_in(&world, "hat", &[Scope::Connections]).unwrap(), None);
        assert_eq!(resolve_in(&world, "wrenches", &[Scope::Inventory]).unwrap(), None);
    }

    #[test]
    fn scope_limits_search() {
        let mut world = test_world();
        assert_eq!(resolve_in(&world, "wrench", &[Scope::RoomItems]).unwrap(), None);
        world
            .transfer_item(ItemId(3), Holder::Inventory, Holder::Location(LocationId(1)))
            .unwrap();
        assert_eq!(
            resolve_in(&world, "wrench", &[Scope::RoomItems]).unwrap(),
            Some(EntityRef::Item(ItemId(3)))
        );
        assert_eq!(resolve_in(&world, "wrench", &[Scope::Inventory]).unwrap(), None);
    }

    #[test]
    fn empty_candidates_resolve_nothing() {
        let world = test_world();
        assert_eq!(resolve_by_label(&world, "cube", &[]), None);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn resolution_ignores_case(flips in prop::collection::vec(any::<bool>(), 4)) {
                let world = test_world();
                let typed: String = "cube"
                    .chars()
                    .zip(flips)
                    .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
                    .collect();
                let found = resolve_in(&world, &typed, &[Scope::Connections, Scope::RoomItems]).unwrap();
                prop_assert_eq!(found, Some(EntityRef::Item(ItemId(2))));
            }
        }
    }
}
