use model::location::Location;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: i32,
    pub name: Option<String>,
    pub additional_name: Option<String>,
    pub comment_name: Option<String>,
    pub street: String,
    pub housenum: String,
    pub additional_address: Option<String>,
    pub comment_address: Option<String>,
    pub country: String,
    pub country_a: String,
    pub region: String,
    pub region_a: String,
    pub county: Option<String>,
    pub locality: Option<String>,
    pub wof_country: i32,
    pub wof_region: i32,
    pub wof_county: Option<i32>,
    pub wof_locality: Option<i32>,
    pub coords_id: Option<i32>,
}

impl DatabaseRow for LocationRow {
    type Model = Location;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Location {
            id: Some(self.get_id()),
            name: self.name,
            additional_name: self.additional_name,
            comment_name: self.comment_name,
            street: Some(self.street),
            housenum: Some(self.housenum),
            additional_address: self.additional_address,
            comment_address: self.comment_address,
            country: Some(self.country),
            country_a: Some(self.country_a),
            region: Some(self.region),
            region_a: Some(self.region_a),
            county: self.county,
            locality: self.locality,
            wof_country: Some(self.wof_country),
            wof_region: Some(self.wof_region),
            wof_county: self.wof_county,
            wof_locality: self.wof_locality,
            coords_id: self.coords_id.map(Id::new),
            coords: None,
            tasks: Vec::new(),
            dist_from: Vec::new(),
            dist_to: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_a_location_with_address() {
        let row = LocationRow {
            id: 1,
            name: Some("Depot".to_owned()),
            additional_name: None,
            comment_name: Some("HQ".to_owned()),
            street: "Main St".to_owned(),
            housenum: "12".to_owned(),
            additional_address: None,
            comment_address: None,
            country: "Germany".to_owned(),
            country_a: "DEU".to_owned(),
            region: "Schleswig-Holstein".to_owned(),
            region_a: "SH".to_owned(),
            county: None,
            locality: Some("Kiel".to_owned()),
            wof_country: 85633111,
            wof_region: 85682555,
            wof_county: None,
            wof_locality: Some(101748473),
            coords_id: Some(3),
        };
        let location = row.to_model();
        assert_eq!(location.address(), "Depot (HQ), Main St, 12");
        assert_eq!(location.coords_id, Some(Id::new(3)));
        assert!(location.coords.is_none());
    }
}
