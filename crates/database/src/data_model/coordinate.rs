use model::coordinate::Coordinate;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct CoordinateRow {
    pub id: i32,
    pub lat: f64,
    pub lon: f64,
}

impl DatabaseRow for CoordinateRow {
    type Model = Coordinate;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Coordinate {
            id: Some(self.get_id()),
            lat: Some(self.lat),
            lon: Some(self.lon),
            locations: Vec::new(),
        }
    }
}
