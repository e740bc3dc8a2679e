//! Repository for the `companies` table.

use corpdir_core::types::EntityId;
use sqlx::{Executor, QueryBuilder};

use crate::models::Company;
use crate::Db;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, country";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// List all companies ordered by name.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Company>, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY name");
        sqlx::query_as::<_, Company>(&query)
            .fetch_all(executor)
            .await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: EntityId) -> Result<Option<Company>, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = ?1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Fetch every company whose id is in `ids`, ordered by name.
    ///
    /// Ids that do not exist are silently absent from the result.
    pub async fn find_by_ids<'e, E>(executor: E, ids: &[EntityId]) -> Result<Vec<Company>, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Db>::new(format!("SELECT {COLUMNS} FROM companies WHERE id IN ("));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY name");

        builder
            .build_query_as::<Company>()
            .fetch_all(executor)
            .await
    }

    pub async fn create<'e, E>(executor: E, company: &Company) -> Result<(), sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        sqlx::query("INSERT INTO companies (id, name, address, country) VALUES (?1, ?2, ?3, ?4)")
            .bind(company.id)
            .bind(&company.name)
            .bind(&company.address)
            .bind(&company.country)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Write back every mutable column. Returns `false` if the row is gone.
    pub async fn update<'e, E>(executor: E, company: &Company) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let result = sqlx::query(
            "UPDATE companies SET name = ?2, address = ?3, country = ?4 WHERE id = ?1",
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.address)
        .bind(&company.country)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a company; its employees go with it (`ON DELETE CASCADE`).
    pub async fn delete<'e, E>(executor: E, company: &Company) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?1")
            .bind(company.id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
