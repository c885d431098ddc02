//! Core types for XYMO: locations, connections, items, and the world model.
//!
//! This crate owns all game state. It is independent of the command
//! interpreter: you can construct a [`World`] programmatically or load one
//! from JSON world data.

/// Declarative world data and loading.
pub mod data;
/// Entity types and identifiers.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Player state: current location and inventory.
pub mod player;
/// The central world model.
pub mod world;

/// Re-export world data types.
pub use data::{BUNDLED_WORLD, WorldData};
/// Re-export entity types.
pub use entity::{
    Connection, ConnectionFace, ConnectionId, Item, ItemId, Location, LocationId, UnlockSolution,
};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export player state.
pub use player::PlayerState;
/// Re-export world model types.
pub use world::{Holder, World, WorldMeta};
