use model::{distance::Distance, location::Location};
use sqlx::{Executor, Postgres};
use utility::id::{Id, IdWrapper};

use crate::data_model::{distance::DistanceRow, to_models, DatabaseRow, Result};

pub async fn insert<'c, E>(executor: E, distance: &Distance) -> Result<Distance>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO distances(loc_from, loc_to, distance)
        VALUES ($1, $2, $3)
        RETURNING id, loc_from, loc_to, distance;
        ",
    )
    .bind(distance.loc_from.raw())
    .bind(distance.loc_to.raw())
    .bind(distance.distance)
    .fetch_one(executor)
    .await
    .map(|row: DistanceRow| row.to_model())
}

/// All distances starting at `loc_from`.
pub async fn get_from<'c, E>(executor: E, loc_from: Id<Location>) -> Result<Vec<Distance>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, loc_from, loc_to, distance
        FROM distances
        WHERE loc_from = $1
        ORDER BY id ASC;
        ",
    )
    .bind(loc_from.raw())
    .fetch_all(executor)
    .await
    .map(|rows: Vec<DistanceRow>| to_models(rows))
}
