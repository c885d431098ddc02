pub mod check;
pub mod export;
pub mod list;
pub mod play;

use std::path::Path;

use xymo_core::World;

/// Load a world file, or the bundled world when no path is given.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => World::load(path).map_err(|e| format!("{}: {e}", path.display())),
        None => World::bundled().map_err(|e| format!("bundled world: {e}")),
    }
}
