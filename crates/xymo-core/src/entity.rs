use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key of a location in the world data.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LocationId(pub u32);

/// Stable key of a connection in the world data.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ConnectionId(pub u32);

/// Stable key of an item in the world data.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location #{}", self.0)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection #{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item #{}", self.0)
    }
}

/// A place the player can stand in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Filled in from the map key when the world is built.
    #[serde(skip)]
    pub id: LocationId,
    /// Display label shown in `status`.
    pub label: String,
    /// Description text shown in `status`.
    pub description: String,
    /// Connections reachable from here, in display order.
    #[serde(default)]
    pub connections: Vec<ConnectionId>,
    /// Items lying here, in display order.
    #[serde(default)]
    pub items: Vec<ItemId>,
}

impl Location {
    /// Create an empty location.
    pub fn new(id: LocationId, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            description: description.into(),
            connections: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Builder: list a connection as reachable from this location.
    pub fn with_connection(mut self, connection: ConnectionId) -> Self {
        self.connections.push(connection);
        self
    }

    /// Builder: place an item here.
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.items.push(item);
        self
    }
}

/// A bidirectional link between locations, seen through one face per origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Filled in from the map key when the world is built.
    #[serde(skip)]
    pub id: ConnectionId,
    /// The noun players type, e.g. `door`.
    pub label: String,
    /// One-way views keyed by the location they are seen from.
    pub faces: BTreeMap<LocationId, ConnectionFace>,
}

impl Connection {
    /// Create a connection with no faces.
    pub fn new(id: ConnectionId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            faces: BTreeMap::new(),
        }
    }

    /// Builder: add the face seen from `origin`.
    pub fn with_face(mut self, origin: LocationId, face: ConnectionFace) -> Self {
        self.faces.insert(origin, face);
        self
    }

    /// The face seen from `origin`, if the connection is visible there.
    pub fn face(&self, origin: LocationId) -> Option<&ConnectionFace> {
        self.faces.get(&origin)
    }
}

/// The view of a connection from one specific origin.
///
/// Each face carries its own lock, so unlocking one side leaves the other
/// side as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionFace {
    /// Line shown in `status` and as the first line of `inspect`.
    pub description: String,
    /// Extra detail shown by `inspect`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Whether `enter` is blocked from this side.
    #[serde(default)]
    pub locked: bool,
    /// Text emitted on a successful `enter`.
    pub transition: String,
    /// Condition that unlocks this face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<UnlockSolution>,
    /// Where `enter` leads.
    pub destination: LocationId,
}

impl ConnectionFace {
    /// Create an unlocked face leading to `destination`.
    pub fn new(
        description: impl Into<String>,
        transition: impl Into<String>,
        destination: LocationId,
    ) -> Self {
        Self {
            description: description.into(),
            long_description: None,
            locked: false,
            transition: transition.into(),
            solution: None,
            destination,
        }
    }

    /// Builder: set the long description.
    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = Some(text.into());
        self
    }

    /// Builder: lock the face behind a solution.
    pub fn locked_by(mut self, solution: UnlockSolution) -> Self {
        self.locked = true;
        self.solution = Some(solution);
        self
    }
}

/// What unlocks a locked face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnlockSolution {
    /// Using a specific item on the face.
    Item {
        /// The item that fits.
        item: ItemId,
        /// Text emitted after `Success!`.
        reveal: String,
    },
    /// An input sequence entered through the interfacer. Declared in world
    /// data but no command satisfies it yet.
    Interfacer {
        /// The expected sequence.
        sequence: Vec<String>,
        /// Text emitted after `Success!`.
        reveal: String,
    },
}

impl UnlockSolution {
    /// Whether using `item` satisfies this solution.
    pub fn accepts(&self, item: ItemId) -> bool {
        match self {
            Self::Item { item: required, .. } => *required == item,
            Self::Interfacer { .. } => false,
        }
    }

    /// The text revealed on success.
    pub fn reveal(&self) -> &str {
        match self {
            Self::Item { reveal, .. } | Self::Interfacer { reveal, .. } => reveal,
        }
    }
}

/// A portable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Filled in from the map key when the world is built.
    #[serde(skip)]
    pub id: ItemId,
    /// The noun players type, e.g. `cube`.
    pub label: String,
    /// Line shown in `status` and as the first line of `inspect`.
    pub description: String,
    /// Extra detail shown by `inspect`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

impl Item {
    /// Create an item.
    pub fn new(id: ItemId, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            description: description.into(),
            long_description: None,
        }
    }

    /// Builder: set the long description.
    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = Some(text.into());
        self
    }
}
