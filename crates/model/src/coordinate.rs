use std::fmt;

use serde_json::Value;
use utility::id::{HasId, Id};

use crate::{
    construct::{column, Entity, Mapper, Related, Relation, Result, UnknownFields},
    display_float, display_option,
    location::Location,
};

/// A geographic point. `(lat, lon)` is unique across the table, so locations
/// at the same spot share one row.
/// Table: `coordinates`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinate {
    pub id: Option<Id<Coordinate>>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub locations: Vec<Related<Location>>,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
            ..Default::default()
        }
    }
}

impl HasId for Coordinate {
    type IdType = i32;
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Coordinates(id={}, lat={}, lon={})>",
            display_option(&self.id),
            display_float(&self.lat),
            display_float(&self.lon)
        )
    }
}

static MAPPER: Mapper = Mapper {
    entity: "Coordinate",
    table: "coordinates",
    columns: &["id", "lat", "lon"],
    relationships: &["locations"],
};

impl Entity for Coordinate {
    fn mapper() -> &'static Mapper {
        &MAPPER
    }

    fn set_column(&mut self, key: &str, value: &Value) -> serde_json::Result<()> {
        match key {
            "id" => self.id = column(value)?,
            "lat" => self.lat = column(value)?,
            "lon" => self.lon = column(value)?,
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
        if key == "locations" {
            self.locations = Relation::<Location>::decode(value, policy)?.into_many();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_like_a_record() {
        let mut coordinate = Coordinate::new(54.3, 10.1);
        assert_eq!(
            coordinate.to_string(),
            "<Coordinates(id=None, lat=54.3, lon=10.1)>"
        );
        coordinate.id = Some(Id::new(4));
        assert_eq!(
            coordinate.to_string(),
            "<Coordinates(id=4, lat=54.3, lon=10.1)>"
        );
    }

    #[test]
    fn whole_degrees_keep_their_fraction() {
        assert_eq!(
            Coordinate::new(1.0, -3.0).to_string(),
            "<Coordinates(id=None, lat=1.0, lon=-3.0)>"
        );
    }

    #[test]
    fn back_reference_builds_locations() {
        let coordinate = Coordinate::from_value(
            &json!({"lat": 1.5, "lon": 2.5, "locations": [{"name": "Depot"}]}),
            UnknownFields::Warn,
        )
        .unwrap();
        assert_eq!(coordinate.lat, Some(1.5));
        let location = coordinate.locations[0].entity().unwrap();
        assert_eq!(location.name.as_deref(), Some("Depot"));
    }
}
