use crate::entity::{ConnectionId, ItemId, LocationId};
use crate::world::Holder;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or manipulating a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested location does not exist.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// The requested connection does not exist.
    #[error("connection not found: {0}")]
    ConnectionNotFound(ConnectionId),

    /// The requested item does not exist.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// The connection has no face seen from the given origin.
    #[error("{connection} has no face at {origin}")]
    FaceNotFound {
        /// The connection that was looked up.
        connection: ConnectionId,
        /// The origin location that has no face.
        origin: LocationId,
    },

    /// A transfer source does not hold the item.
    #[error("{item} is not held by {holder}")]
    ItemNotHeld {
        /// The item being moved.
        item: ItemId,
        /// The holder that was expected to have it.
        holder: Holder,
    },

    /// An entity with the same id was already added.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// World data is internally inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// World data is not well-formed JSON for the expected shape.
    #[error("invalid world data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A world file could not be read.
    #[error("cannot read world file: {0}")]
    Io(#[from] std::io::Error),
}
