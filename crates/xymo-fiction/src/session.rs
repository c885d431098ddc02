//! Interactive session management.

use xymo_core::{ConnectionId, Holder, ItemId, World};

use crate::config::SessionConfig;
use crate::error::{FictionError, FictionResult, NotFoundScope};
use crate::narrator::{self, HELP, NO_FURTHER_INFO, SUCCESS};
use crate::output::OutputSink;
use crate::parser::{Command, EntityRef, Scope, parse_command, resolve_in};

/// An interactive session: one world, one command at a time.
pub struct FictionSession {
    /// The world being explored.
    world: World,
    config: SessionConfig,
}

impl FictionSession {
    /// Create a session with the default configuration.
    pub fn new(world: World) -> Self {
        Self::with_config(world, SessionConfig::default())
    }

    /// Create a session with an explicit configuration.
    pub fn with_config(world: World, config: SessionConfig) -> Self {
        Self { world, config }
    }

    /// Create a session on the bundled world.
    pub fn bundled() -> FictionResult<Self> {
        Ok(Self::new(World::bundled()?))
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Emit the opening banner, if the world has one and it is enabled.
    pub fn start(&self, sink: &mut dyn OutputSink) {
        if !self.config.show_intro {
            return;
        }
        if let Some(intro) = &self.world.meta.intro {
            sink.emit(intro, false);
        }
    }

    /// Process one line of player input.
    ///
    /// Every outcome, including every failure, is reported through `sink`.
    /// A failed command leaves the world unchanged.
    pub fn process(&mut self, input: &str, sink: &mut dyn OutputSink) {
        let result = parse_command(input).and_then(|command| self.execute(command, &mut *sink));
        if let Err(err) = result {
            match &err {
                FictionError::World(inner) => {
                    tracing::warn!(error = %inner, input, "world data inconsistency");
                }
                _ => tracing::debug!(error = %err, input, "command rejected"),
            }
            sink.emit(&err.to_string(), false);
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command, sink: &mut dyn OutputSink) -> FictionResult<()> {
        tracing::debug!(?command, location = %self.world.current_location_id(), "executing");
        match command {
            Command::Help => {
                sink.emit(HELP, false);
                Ok(())
            }
            Command::Status => self.do_status(sink),
            Command::Enter { connection } => self.do_enter(&connection, sink),
            Command::Inspect { target } => self.do_inspect(&target, sink),
            Command::Use { item, target } => self.do_use(&item, &target, sink),
            Command::Stow { item } => self.do_stow(&item, sink),
            Command::Drop { item } => self.do_drop(&item, sink),
        }
    }

    fn find(&self, label: &str, scopes: &[Scope], missing: NotFoundScope) -> FictionResult<EntityRef> {
        resolve_in(&self.world, label, scopes)?.ok_or_else(|| FictionError::not_found(missing, label))
    }

    fn find_connection(
        &self,
        label: &str,
        missing: NotFoundScope,
    ) -> FictionResult<ConnectionId> {
        match self.find(label, &[Scope::Connections], missing)? {
            EntityRef::Connection(id) => Ok(id),
            EntityRef::Item(_) => Err(FictionError::not_found(missing, label)),
        }
    }

    fn find_item(
        &self,
        label: &str,
        scopes: &[Scope],
        missing: NotFoundScope,
    ) -> FictionResult<ItemId> {
        match self.find(label, scopes, missing)? {
            EntityRef::Item(id) => Ok(id),
            EntityRef::Connection(_) => Err(FictionError::not_found(missing, label)),
        }
    }

    fn do_status(&self, sink: &mut dyn OutputSink) -> FictionResult<()> {
        let origin = self.world.current_location_id();
        let location = self.world.current_location()?;

        let mut lines = vec![
            narrator::inventory_line(&self.world)?,
            narrator::location_line(location),
            location.description.clone(),
        ];
        for &id in &location.connections {
            lines.push(self.world.face(id, origin)?.description.clone());
        }
        for &id in &location.items {
            lines.push(self.world.item(id)?.description.clone());
        }

        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            sink.emit(line, i != last);
        }
        Ok(())
    }

    fn do_enter(&mut self, label: &str, sink: &mut dyn OutputSink) -> FictionResult<()> {
        let origin = self.world.current_location_id();
        let id = self.find_connection(label, NotFoundScope::Surroundings)?;
        let connection = self.world.connection(id)?;
        let face = self.world.face(id, origin)?;
        if face.locked {
            return Err(FictionError::Locked(connection.label.clone()));
        }

        let destination = face.destination;
        let transition = face.transition.clone();
        self.world.move_to(destination)?;
        tracing::info!(connection = %id, from = %origin, to = %destination, "entered");
        sink.emit(&transition, false);
        Ok(())
    }

    fn do_inspect(&self, label: &str, sink: &mut dyn OutputSink) -> FictionResult<()> {
        let origin = self.world.current_location_id();
        let target = self.find(
            label,
            &[Scope::Connections, Scope::RoomItems],
            NotFoundScope::Surroundings,
        )?;

        let (description, long_description) = match target {
            EntityRef::Connection(id) => {
                let face = self.world.face(id, origin)?;
                (&face.description, face.long_description.as_deref())
            }
            EntityRef::Item(id) => {
                let item = self.world.item(id)?;
                (&item.description, item.long_description.as_deref())
            }
        };

        sink.emit(description, true);
        let detail = long_description.filter(|text| !text.is_empty());
        sink.emit(detail.unwrap_or(NO_FURTHER_INFO), false);
        Ok(())
    }

    fn do_use(&mut self, item_label: &str, target_label: &str, sink: &mut dyn OutputSink) -> FictionResult<()> {
        let origin = self.world.current_location_id();
        let item_id = self.find_item(
            item_label,
            &[Scope::RoomItems, Scope::Inventory],
            NotFoundScope::NearbyOrStorage,
        )?;
        let conn_id = self.find_connection(target_label, NotFoundScope::Object)?;

        let connection = self.world.connection(conn_id)?;
        let face = self.world.face(conn_id, origin)?;
        if !face.locked {
            return Err(FictionError::AlreadyUnlocked(connection.label.clone()));
        }

        let Some(solution) = face.solution.as_ref().filter(|s| s.accepts(item_id)) else {
            return Err(FictionError::NotAccepted {
                object: connection.label.clone(),
                item: self.world.item(item_id)?.label.clone(),
            });
        };

        let reveal = solution.reveal().to_string();
        self.world.set_connection_locked(conn_id, origin, false)?;
        tracing::info!(connection = %conn_id, at = %origin, item = %item_id, "unlocked");
        sink.emit(SUCCESS, true);
        sink.emit(&reveal, false);
        Ok(())
    }

    fn do_stow(&mut self, label: &str, sink: &mut dyn OutputSink) -> FictionResult<()> {
        let origin = self.world.current_location_id();
        let item = self.find_item(label, &[Scope::RoomItems], NotFoundScope::Room)?;
        self.world
            .transfer_item(item, Holder::Location(origin), Holder::Inventory)?;
        sink.emit(&narrator::stowed(label), false);
        Ok(())
    }

    fn do_drop(&mut self, label: &str, sink: &mut dyn OutputSink) -> FictionResult<()> {
        let origin = self.world.current_location_id();
        let item = self.find_item(label, &[Scope::Inventory], NotFoundScope::Storage)?;
        self.world
            .transfer_item(item, Holder::Inventory, Holder::Location(origin))?;
        sink.emit(&narrator::dropped(label), false);
        Ok(())
    }
}
