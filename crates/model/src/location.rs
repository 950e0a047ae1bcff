use std::fmt::{self, Write as _};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utility::id::{HasId, Id};

use crate::{
    construct::{column, Entity, Mapper, Related, Relation, Result, UnknownFields},
    coordinate::Coordinate,
    display_option,
    distance::Distance,
    task::Task,
};

/// A house number as it appears in incoming data. Stored as text, since
/// numbers like `12a` are common.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum HouseNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for HouseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HouseNumber::Number(number) => write!(f, "{}", number),
            HouseNumber::Text(text) => f.write_str(text),
        }
    }
}

/// A physical address, optionally geocoded.
///
/// The `wof_*` fields reference the gazetteer entries of the country, region,
/// county and locality the address lies in.
/// Table: `locations`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub id: Option<Id<Location>>,
    pub name: Option<String>,
    pub additional_name: Option<String>,
    pub comment_name: Option<String>,
    pub street: Option<String>,
    pub housenum: Option<String>,
    pub additional_address: Option<String>,
    pub comment_address: Option<String>,
    pub country: Option<String>,
    pub country_a: Option<String>,
    pub region: Option<String>,
    pub region_a: Option<String>,
    pub county: Option<String>,
    pub locality: Option<String>,
    pub wof_country: Option<i32>,
    pub wof_region: Option<i32>,
    pub wof_county: Option<i32>,
    pub wof_locality: Option<i32>,
    pub coords_id: Option<Id<Coordinate>>,
    pub coords: Option<Box<Related<Coordinate>>>,
    pub tasks: Vec<Related<Task>>,
    /// Distances starting here.
    pub dist_from: Vec<Related<Distance>>,
    /// Distances ending here.
    pub dist_to: Vec<Related<Distance>>,
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl Location {
    /// Formats the location as a single line, e.g. `Depot (HQ), Main St, 12`.
    pub fn address(&self) -> String {
        let name = filled(&self.name);
        let additional_name = filled(&self.additional_name);

        let mut address = String::new();
        if let Some(name) = name {
            address.push_str(name);
        }
        if let Some(comment) = filled(&self.comment_name) {
            let _ = write!(address, " ({})", comment);
        }
        if let Some(additional_name) = additional_name {
            if name.is_some() {
                address.push_str(", ");
            }
            let _ = write!(address, "{}, ", additional_name);
        } else if name.is_some() {
            address.push_str(", ");
        }
        address.push_str(self.street.as_deref().unwrap_or_default());
        let _ = write!(address, ", {}", self.housenum.as_deref().unwrap_or_default());
        if let Some(additional_address) = filled(&self.additional_address) {
            let _ = write!(address, " - {}", additional_address);
        }
        if let Some(comment) = filled(&self.comment_address) {
            let _ = write!(address, " ({})", comment);
        }
        address.trim().to_owned()
    }

    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.coords.as_deref().and_then(Related::entity)
    }
}

impl HasId for Location {
    type IdType = i32;
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Location(id={}, name={}, address={}, coords=",
            display_option(&self.id),
            display_option(&self.name),
            self.address()
        )?;
        match self.coords.as_deref() {
            Some(Related::Entity(coordinate)) => write!(f, "{}", coordinate)?,
            Some(Related::Other(value)) => write!(f, "{}", value)?,
            None => f.write_str("None")?,
        }
        f.write_str(")>")
    }
}

static MAPPER: Mapper = Mapper {
    entity: "Location",
    table: "locations",
    columns: &[
        "id",
        "name",
        "additional_name",
        "comment_name",
        "street",
        "housenum",
        "additional_address",
        "comment_address",
        "country",
        "country_a",
        "region",
        "region_a",
        "county",
        "locality",
        "wof_country",
        "wof_region",
        "wof_county",
        "wof_locality",
        "coords_id",
    ],
    relationships: &["coords", "tasks", "dist_from", "dist_to"],
};

impl Entity for Location {
    fn mapper() -> &'static Mapper {
        &MAPPER
    }

    fn set_column(&mut self, key: &str, value: &Value) -> serde_json::Result<()> {
        match key {
            "id" => self.id = column(value)?,
            "name" => self.name = column(value)?,
            "additional_name" => self.additional_name = column(value)?,
            "comment_name" => self.comment_name = column(value)?,
            "street" => self.street = column(value)?,
            "housenum" => {
                self.housenum =
                    column::<HouseNumber>(value)?.map(|number| number.to_string())
            }
            "additional_address" => self.additional_address = column(value)?,
            "comment_address" => self.comment_address = column(value)?,
            "country" => self.country = column(value)?,
            "country_a" => self.country_a = column(value)?,
            "region" => self.region = column(value)?,
            "region_a" => self.region_a = column(value)?,
            "county" => self.county = column(value)?,
            "locality" => self.locality = column(value)?,
            "wof_country" => self.wof_country = column(value)?,
            "wof_region" => self.wof_region = column(value)?,
            "wof_county" => self.wof_county = column(value)?,
            "wof_locality" => self.wof_locality = column(value)?,
            "coords_id" => self.coords_id = column(value)?,
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
            "coords" => {
                self.coords = Relation::<Coordinate>::decode(value, policy)?
                    .into_single(MAPPER.entity, "coords")?
            }
            "tasks" => {
                self.tasks = Relation::<Task>::decode(value, policy)?.into_many()
            }
            "dist_from" => {
                self.dist_from =
                    Relation::<Distance>::decode(value, policy)?.into_many()
            }
            "dist_to" => {
                self.dist_to = Relation::<Distance>::decode(value, policy)?.into_many()
            }
            _ => {}
        }
        Ok(())
    }
}
