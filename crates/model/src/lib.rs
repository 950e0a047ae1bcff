use std::fmt::Display;

pub mod construct;
pub mod coordinate;
pub mod day;
pub mod distance;
pub mod dto;
pub mod location;
pub mod task;

pub use construct::{ConstructionError, Entity, Mapper, Related, Relation, UnknownFields};

/// Renders an optional value, `None` for a missing one.
pub(crate) fn display_option<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "None".to_owned(),
    }
}

/// Renders an optional float keeping its fractional part, `1.0` rather than
/// `1`.
pub(crate) fn display_float(value: &Option<f64>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "None".to_owned(),
    }
}
