use model::coordinate::Coordinate;
use sqlx::{Executor, Postgres};
use utility::id::Id;

use crate::data_model::{coordinate::CoordinateRow, DatabaseRow, Result};

/// Inserts a coordinate. Fails with a unique violation on
/// `unique_coordinates` if the point is already stored.
pub async fn insert<'c, E>(executor: E, coordinate: &Coordinate) -> Result<Coordinate>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO coordinates(lat, lon)
        VALUES ($1, $2)
        RETURNING id, lat, lon;
        ",
    )
    .bind(coordinate.lat)
    .bind(coordinate.lon)
    .fetch_one(executor)
    .await
    .map(|row: CoordinateRow| row.to_model())
}

pub async fn get<'c, E>(executor: E, id: Id<Coordinate>) -> Result<Coordinate>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as("SELECT id, lat, lon FROM coordinates WHERE id = $1;")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map(|row: CoordinateRow| row.to_model())
}

pub async fn get_at<'c, E>(executor: E, lat: f64, lon: f64) -> Result<Option<Coordinate>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as("SELECT id, lat, lon FROM coordinates WHERE lat = $1 AND lon = $2;")
        .bind(lat)
        .bind(lon)
        .fetch_optional(executor)
        .await
        .map(|row: Option<CoordinateRow>| row.map(|row| row.to_model()))
}
