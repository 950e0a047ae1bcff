use model::location::Location;
use sqlx::{Executor, Postgres};
use utility::id::{Id, IdWrapper};

use crate::data_model::{location::LocationRow, DatabaseRow, Result};

const COLUMNS: &str = "
    id,
    name,
    additional_name,
    comment_name,
    street,
    housenum,
    additional_address,
    comment_address,
    country,
    country_a,
    region,
    region_a,
    county,
    locality,
    wof_country,
    wof_region,
    wof_county,
    wof_locality,
    coords_id
";

/// Inserts the location's own columns. A related coordinate is referenced by
/// `coords_id` or the id of the related coordinate, it is not stored here.
pub async fn insert<'c, E>(executor: E, location: &Location) -> Result<Location>
where
    E: Executor<'c, Database = Postgres>,
{
    let coords_id = location
        .coords_id
        .or_else(|| location.coordinate().and_then(|coordinate| coordinate.id));

    sqlx::query_as(&format!(
        "
        INSERT INTO locations(
            name,
            additional_name,
            comment_name,
            street,
            housenum,
            additional_address,
            comment_address,
            country,
            country_a,
            region,
            region_a,
            county,
            locality,
            wof_country,
            wof_region,
            wof_county,
            wof_locality,
            coords_id
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9,
            $10, $11, $12, $13, $14, $15, $16, $17, $18
        )
        RETURNING {};
        ",
        COLUMNS
    ))
    .bind(&location.name)
    .bind(&location.additional_name)
    .bind(&location.comment_name)
    .bind(&location.street)
    .bind(&location.housenum)
    .bind(&location.additional_address)
    .bind(&location.comment_address)
    .bind(&location.country)
    .bind(&location.country_a)
    .bind(&location.region)
    .bind(&location.region_a)
    .bind(&location.county)
    .bind(&location.locality)
    .bind(location.wof_country)
    .bind(location.wof_region)
    .bind(location.wof_county)
    .bind(location.wof_locality)
    .bind(coords_id.raw())
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| row.to_model())
}

pub async fn get<'c, E>(executor: E, id: Id<Location>) -> Result<Location>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!("SELECT {} FROM locations WHERE id = $1;", COLUMNS))
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map(|row: LocationRow| row.to_model())
}

/// Deletes the location together with its tasks and all distances starting or
/// ending there. Returns whether a location was deleted.
pub async fn delete<'c, E>(executor: E, id: Id<Location>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM locations WHERE id = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map(|result| result.rows_affected() > 0)
}
