use std::fmt;

use serde_json::Value;
use utility::id::{HasId, Id};

use crate::{
    construct::{column, Entity, Mapper, Related, Relation, Result, UnknownFields},
    display_option,
    location::Location,
};

/// A directed edge between two locations. Neither self loops nor parallel
/// edges are prevented.
/// Table: `distances`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distance {
    pub id: Option<Id<Distance>>,
    /// Start point.
    pub loc_from: Option<Id<Location>>,
    /// End point.
    pub loc_to: Option<Id<Location>>,
    pub distance: Option<i32>,
    pub loc_from_obj: Option<Box<Related<Location>>>,
    pub loc_to_obj: Option<Box<Related<Location>>>,
}

impl Distance {
    pub fn between(loc_from: Id<Location>, loc_to: Id<Location>, distance: i32) -> Self {
        Self {
            loc_from: Some(loc_from),
            loc_to: Some(loc_to),
            distance: Some(distance),
            ..Default::default()
        }
    }

    pub fn from_location(&self) -> Option<&Location> {
        self.loc_from_obj.as_deref().and_then(Related::entity)
    }

    pub fn to_location(&self) -> Option<&Location> {
        self.loc_to_obj.as_deref().and_then(Related::entity)
    }
}

impl HasId for Distance {
    type IdType = i32;
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Distance(id={}, loc_from={}, loc_to={}, distance={})>",
            display_option(&self.id),
            display_option(&self.loc_from),
            display_option(&self.loc_to),
            display_option(&self.distance)
        )
    }
}

static MAPPER: Mapper = Mapper {
    entity: "Distance",
    table: "distances",
    columns: &["id", "loc_from", "loc_to", "distance"],
    relationships: &["loc_from_obj", "loc_to_obj"],
};

impl Entity for Distance {
    fn mapper() -> &'static Mapper {
        &MAPPER
    }

    fn set_column(&mut self, key: &str, value: &Value) -> serde_json::Result<()> {
        match key {
            "id" => self.id = column(value)?,
            "loc_from" => self.loc_from = column(value)?,
            "loc_to" => self.loc_to = column(value)?,
            "distance" => self.distance = column(value)?,
            _ => {}
        }
        Ok(())
    }

    fn set_relationship(
        &mut self,
        key: &str,
        value: &Value,
        policy: UnknownFields,
    ) -> Result<()> {
        match key {
            "loc_from_obj" => {
                self.loc_from_obj = Relation::<Location>::decode(value, policy)?
                    .into_single(MAPPER.entity, "loc_from_obj")?
            }
            "loc_to_obj" => {
                self.loc_to_obj = Relation::<Location>::decode(value, policy)?
                    .into_single(MAPPER.entity, "loc_to_obj")?
            }
            _ => {}
        }
        Ok(())
    }
}
