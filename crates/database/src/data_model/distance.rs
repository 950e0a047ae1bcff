use model::distance::Distance;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct DistanceRow {
    pub id: i32,
    pub loc_from: i32,
    pub loc_to: i32,
    pub distance: i32,
}

impl DatabaseRow for DistanceRow {
    type Model = Distance;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Distance {
            id: Some(self.get_id()),
            ..Distance::between(Id::new(self.loc_from), Id::new(self.loc_to), self.distance)
        }
    }
}
