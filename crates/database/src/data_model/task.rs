use model::task::Task;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: i32,
    pub day_id: i32,
    pub count: Option<i32>,
    pub name: String,
    pub loc_id: i32,
    pub department: String,
    pub responsible: String,
    pub note: Option<String>,
}

impl DatabaseRow for TaskRow {
    type Model = Task;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Task {
            id: Some(self.get_id()),
            day_id: Some(Id::new(self.day_id)),
            count: self.count,
            name: Some(self.name),
            loc_id: Some(Id::new(self.loc_id)),
            department: Some(self.department),
            responsible: Some(self.responsible),
            note: self.note,
            day: None,
            location: None,
        }
    }
}
