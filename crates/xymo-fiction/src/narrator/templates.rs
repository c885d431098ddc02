//! Console text templates.

use xymo_core::{Location, World, WorldResult};

/// Command reference printed by `help`.
pub const HELP: &str = concat!(
    "Commands:\n",
    "status                  Print description of surroundings and rover status\n",
    "enter -loc-             Enter -location-\n",
    "inspect -obj-           Conduct scan of -object- \n",
    "use -item- on -obj-     Use -item- on nearby -object-\n",
    "stow -item-             Add -item- to storage module\n",
    "drop -item-             Remove -item- from storage module",
);

/// Second `inspect` line when there is no long description.
pub const NO_FURTHER_INFO: &str = "No further information available on close inspection.";

/// First line of a successful unlock.
pub const SUCCESS: &str = "Success!";

/// Uppercase the first character and leave the rest unchanged.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The `status` storage line.
///
/// Each label is prefixed with a space and the labels are joined with
/// commas, so two items read `[INVENTORY:]  cube, interfacer`.
pub fn inventory_line(world: &World) -> WorldResult<String> {
    let labels = world
        .inventory()
        .iter()
        .map(|&id| world.item(id).map(|item| format!(" {}", item.label)))
        .collect::<WorldResult<Vec<_>>>()?;
    Ok(format!("[INVENTORY:] {}", labels.join(",")))
}

/// The `status` location header line.
pub fn location_line(location: &Location) -> String {
    format!("[ENVIRONMENT READING:] {}", location.label)
}

/// Confirmation for `stow`.
pub fn stowed(label: &str) -> String {
    format!("Item added to storage module: {label}")
}

/// Confirmation for `drop`.
pub fn dropped(label: &str) -> String {
    format!("Item removed from storage module: {label}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use xymo_core::{Holder, ItemId, LocationId};

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("door"), "Door");
        assert_eq!(capitalize("arc-chain door"), "Arc-chain door");
        assert_eq!(capitalize("dOOR"), "DOOR");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn help_lists_every_command() {
        for verb in ["status", "enter", "inspect", "use", "stow", "drop"] {
            assert!(HELP.lines().any(|line| line.starts_with(verb)), "{verb}");
        }
    }

    #[test]
    fn empty_inventory_line() {
        let world = World::bundled().unwrap();
        assert_eq!(inventory_line(&world).unwrap(), "[INVENTORY:] ");
    }

    #[test]
    fn inventory_line_keeps_comma_quirk() {
        let mut world = World::bundled().unwrap();
        world.give_item(ItemId(0)).unwrap();
        world
            .transfer_item(ItemId(1), Holder::Location(LocationId(2)), Holder::Inventory)
            .unwrap();
        assert_eq!(
            inventory_line(&world).unwrap(),
            "[INVENTORY:]  interfacer, cube"
        );
    }

    #[test]
    fn confirmations_echo_typed_label() {
        assert_eq!(stowed("cube"), "Item added to storage module: cube");
        assert_eq!(dropped("cube"), "Item removed from storage module: cube");
    }
}
