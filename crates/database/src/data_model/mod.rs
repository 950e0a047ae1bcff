use utility::id::{HasId, Id};

pub mod coordinate;
pub mod day;
pub mod distance;
pub mod location;
pub mod task;

pub type Result<O> = core::result::Result<O, sqlx::Error>;

/// A row as stored in its table, convertible into the entity it backs.
pub trait DatabaseRow {
    type Model: HasId;

    fn get_id(&self) -> Id<Self::Model>;
    fn to_model(self) -> Self::Model;
}

pub fn to_models<R: DatabaseRow>(rows: Vec<R>) -> Vec<R::Model> {
    rows.into_iter().map(|row| row.to_model()).collect::<Vec<_>>()
}
