//! Repository for the `employees` table.

use corpdir_core::ordering::build_order_clause;
use corpdir_core::parameters::EmployeeParameters;
use corpdir_core::types::EntityId;
use sqlx::{Executor, QueryBuilder};

use crate::models::Employee;
use crate::{Db, DbPool};

const COLUMNS: &str = "id, name, age, position, company_id";

/// Columns a client may sort by.
const SORTABLE: &[&str] = &["name", "age", "position"];
const DEFAULT_ORDER: &str = "name ASC";

pub struct EmployeeRepo;

impl EmployeeRepo {
    /// One page of a company's employees plus the total number of matches.
    ///
    /// Applies the age range, the case-insensitive name search and the
    /// requested ordering from `params`.
    pub async fn list_for_company(
        pool: &DbPool,
        company_id: EntityId,
        params: &EmployeeParameters,
    ) -> Result<(Vec<Employee>, i64), sqlx::Error> {
        let search = params.trimmed_search_term();

        let mut count = QueryBuilder::<Db>::new("SELECT COUNT(*) FROM employees WHERE company_id = ");
        count.push_bind(company_id);
        push_filters(&mut count, params, search);
        let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

        let order = build_order_clause(params.order_by.as_deref(), SORTABLE, DEFAULT_ORDER);
        let mut select = QueryBuilder::<Db>::new(format!("SELECT {COLUMNS} FROM employees WHERE company_id = "));
        select.push_bind(company_id);
        push_filters(&mut select, params, search);
        select.push(" ORDER BY ");
        select.push(order);
        select.push(" LIMIT ");
        select.push_bind(i64::from(params.page_size()));
        select.push(" OFFSET ");
        select.push_bind(params.offset());

        let items = select.build_query_as::<Employee>().fetch_all(pool).await?;
        Ok((items, total))
    }

    /// Find an employee by id, scoped to its company.
    pub async fn find_for_company<'e, E>(
        executor: E,
        company_id: EntityId,
        id: EntityId,
    ) -> Result<Option<Employee>, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = ?1 AND company_id = ?2");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(executor)
            .await
    }

    /// Insert `employee` under `company_id`, overwriting its foreign key.
    pub async fn create_for_company<'e, E>(
        executor: E,
        company_id: EntityId,
        employee: &mut Employee,
    ) -> Result<(), sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        employee.company_id = company_id;
        sqlx::query(
            "INSERT INTO employees (id, name, age, position, company_id) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(employee.age)
        .bind(&employee.position)
        .bind(employee.company_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Write back the mutable columns. Identity and company are never changed.
    pub async fn update<'e, E>(executor: E, employee: &Employee) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let result = sqlx::query(
            "UPDATE employees SET name = ?3, age = ?4, position = ?5
             WHERE id = ?1 AND company_id = ?2",
        )
        .bind(employee.id)
        .bind(employee.company_id)
        .bind(&employee.name)
        .bind(employee.age)
        .bind(&employee.position)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, employee: &Employee) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?1 AND company_id = ?2")
            .bind(employee.id)
            .bind(employee.company_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Age range plus a literal, case-insensitive substring match on `name`.
///
/// `instr` treats `%` and `_` as ordinary characters. `LOWER` folds ASCII
/// only, and it is applied to both sides.
fn push_filters<'a>(
    builder: &mut QueryBuilder<'a, Db>,
    params: &EmployeeParameters,
    search: Option<&'a str>,
) {
    builder.push(" AND age >= ");
    builder.push_bind(params.min_age);
    builder.push(" AND age <= ");
    builder.push_bind(params.max_age);
    if let Some(term) = search {
        builder.push(" AND instr(LOWER(name), LOWER(");
        builder.push_bind(term);
        builder.push(")) > 0");
    }
}
