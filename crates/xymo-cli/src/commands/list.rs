use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use xymo_core::{Holder, LocationId, UnlockSolution, World};

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;

    println!("  {}", world.meta.name);
    println!();
    println!("{}", locations_table(&world));
    println!();
    println!("{}", connections_table(&world));
    println!();
    println!("{}", items_table(&world));

    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn shorten(text: &str) -> String {
    if text.chars().count() > 60 {
        let head: String = text.chars().take(57).collect();
        format!("{head}...")
    } else if text.is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}

fn locations_table(world: &World) -> Table {
    let mut table = new_table(vec!["Id", "Location", "Connections", "Items", "Description"]);
    for location in world.locations() {
        let connections: Vec<String> = location
            .connections
            .iter()
            .filter_map(|&id| world.connection(id).ok())
            .map(|c| c.label.clone())
            .collect();
        let items: Vec<String> = location
            .items
            .iter()
            .filter_map(|&id| world.item(id).ok())
            .map(|i| i.label.clone())
            .collect();
        let mut label = location.label.clone();
        if location.id == world.current_location_id() {
            label.push_str(" (start)");
        }
        table.add_row(vec![
            location.id.0.to_string(),
            label,
            connections.join(", "),
            items.join(", "),
            shorten(&location.description),
        ]);
    }
    table
}

fn connections_table(world: &World) -> Table {
    let mut table = new_table(vec!["Id", "Connection", "From", "To", "Locked", "Solution"]);
    for connection in world.connections() {
        for (origin, face) in &connection.faces {
            let place = |id: LocationId| {
                world
                    .location(id)
                    .map(|l| l.label.clone())
                    .unwrap_or_else(|_| id.to_string())
            };
            let solution = match &face.solution {
                Some(UnlockSolution::Item { item, .. }) => world
                    .item(*item)
                    .map(|i| format!("use {}", i.label))
                    .unwrap_or_else(|_| item.to_string()),
                Some(UnlockSolution::Interfacer { sequence, .. }) => {
                    format!("interfacer: {}", sequence.join(" "))
                }
                None => "-".to_string(),
            };
            table.add_row(vec![
                connection.id.0.to_string(),
                connection.label.clone(),
                place(*origin),
                place(face.destination),
                if face.locked { "yes" } else { "no" }.to_string(),
                solution,
            ]);
        }
    }
    table
}

fn items_table(world: &World) -> Table {
    let mut table = new_table(vec!["Id", "Item", "Held by", "Description"]);
    for item in world.items() {
        let holder = match world.holder_of(item.id) {
            Some(Holder::Inventory) => "storage".to_string(),
            Some(Holder::Location(id)) => world
                .location(id)
                .map(|l| l.label.clone())
                .unwrap_or_else(|_| id.to_string()),
            None => "-".to_string(),
        };
        table.add_row(vec![
            item.id.0.to_string(),
            item.label.clone(),
            holder,
            shorten(&item.description),
        ]);
    }
    table
}
