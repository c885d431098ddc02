use std::path::Path;

use xymo_core::BUNDLED_WORLD;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    match output {
        Some(path) => {
            std::fs::write(path, BUNDLED_WORLD)
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            eprintln!("  Exported bundled world to {}", path.display());
        }
        None => print!("{BUNDLED_WORLD}"),
    }
    Ok(())
}
