use model::{day::Day, task::Task};
use sqlx::{Executor, Postgres};
use utility::id::{Id, IdWrapper};

use crate::data_model::{task::TaskRow, to_models, DatabaseRow, Result};

const COLUMNS: &str = "id, day_id, count, name, loc_id, department, responsible, note";

pub async fn insert<'c, E>(executor: E, task: &Task) -> Result<Task>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        INSERT INTO tasks(
            day_id,
            count,
            name,
            loc_id,
            department,
            responsible,
            note
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {};
        ",
        COLUMNS
    ))
    .bind(task.day_id.raw())
    .bind(task.count)
    .bind(&task.name)
    .bind(task.loc_id.raw())
    .bind(&task.department)
    .bind(&task.responsible)
    .bind(&task.note)
    .fetch_one(executor)
    .await
    .map(|row: TaskRow| row.to_model())
}

pub async fn get_by_day<'c, E>(executor: E, day_id: Id<Day>) -> Result<Vec<Task>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {} FROM tasks WHERE day_id = $1 ORDER BY id ASC;",
        COLUMNS
    ))
    .bind(day_id.raw())
    .fetch_all(executor)
    .await
    .map(|rows: Vec<TaskRow>| to_models(rows))
}
