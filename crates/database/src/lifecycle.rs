use async_trait::async_trait;

use crate::{schema::TABLES, PgDatabase};

/// Creating and removing the logbook schema.
#[async_trait]
pub trait Lifecycle: Sync {
    type Error: Send;

    /// Creates every table which does not exist yet.
    async fn init(&self) -> Result<(), Self::Error>;

    /// Drops every table of the schema.
    async fn drop_all(&self) -> Result<(), Self::Error>;

    /// Drops and creates the schema again.
    ///
    /// Both steps run in their own transaction. If `init` fails, the
    /// database is left without tables.
    async fn recreate(&self) -> Result<(), Self::Error> {
        self.drop_all().await?;
        self.init().await
    }
}

#[async_trait]
impl Lifecycle for PgDatabase {
    type Error = sqlx::Error;

    async fn init(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.connection.begin().await?;
        for table in TABLES {
            sqlx::query(table.create).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        log::info!("Database '{}' initialized", self.name);
        Ok(())
    }

    async fn drop_all(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.connection.begin().await?;
        for table in TABLES.iter().rev() {
            sqlx::query(&table.drop_statement())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        log::info!("All tables from '{}' database removed", self.name);
        Ok(())
    }
}
