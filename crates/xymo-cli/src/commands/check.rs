use std::path::Path;

use colored::Colorize;
use xymo_core::World;

pub fn run(file: &Path) -> Result<(), String> {
    let world = World::load(file).map_err(|e| format!("{}: {e}", file.display()))?;

    let unplaced = world
        .items()
        .filter(|item| world.holder_of(item.id).is_none())
        .count();

    println!("  Loaded '{}' from {}.", world.meta.name, file.display());
    println!();
    println!(
        "  {} locations, {} connections, {} items",
        world.locations().count(),
        world.connections().count(),
        world.items().count()
    );
    if unplaced > 0 {
        println!(
            "  {} {unplaced} item{} not placed anywhere",
            "note:".yellow(),
            if unplaced == 1 { " is" } else { "s are" },
        );
    }
    println!("  {}", "All checks passed.".green());
    Ok(())
}
