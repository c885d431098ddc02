//! Fixed console texts and status rendering.

mod templates;

pub use templates::{
    HELP, NO_FURTHER_INFO, SUCCESS, capitalize, dropped, inventory_line, location_line, stowed,
};
