use chrono::NaiveDate;
use model::day::Day;
use sqlx::{Executor, Postgres};
use utility::id::Id;

use crate::data_model::{day::DayRow, to_models, DatabaseRow, Result};

const COLUMNS: &str =
    "id, date, refill, fuel_start, fuel_end, odometer_start, odometer_end";

/// Inserts the day's own columns. Tasks are not stored, the returned day has
/// none.
pub async fn insert<'c, E>(executor: E, day: &Day) -> Result<Day>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        INSERT INTO days(
            date,
            refill,
            fuel_start,
            fuel_end,
            odometer_start,
            odometer_end
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {};
        ",
        COLUMNS
    ))
    .bind(day.date)
    .bind(day.refill)
    .bind(day.fuel_start)
    .bind(day.fuel_end)
    .bind(day.odometer_start)
    .bind(day.odometer_end)
    .fetch_one(executor)
    .await
    .map(|row: DayRow| row.to_model())
}

pub async fn get<'c, E>(executor: E, id: Id<Day>) -> Result<Day>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!("SELECT {} FROM days WHERE id = $1;", COLUMNS))
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map(|row: DayRow| row.to_model())
}

pub async fn get_by_date<'c, E>(executor: E, date: NaiveDate) -> Result<Option<Day>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!("SELECT {} FROM days WHERE date = $1;", COLUMNS))
        .bind(date)
        .fetch_optional(executor)
        .await
        .map(|row: Option<DayRow>| row.map(|row| row.to_model()))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<Day>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!("SELECT {} FROM days ORDER BY date ASC;", COLUMNS))
        .fetch_all(executor)
        .await
        .map(|rows: Vec<DayRow>| to_models(rows))
}

/// Deletes the day and, through the foreign key, all of its tasks. Returns
/// whether a day was deleted.
pub async fn delete<'c, E>(executor: E, id: Id<Day>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM days WHERE id = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map(|result| result.rows_affected() > 0)
}
