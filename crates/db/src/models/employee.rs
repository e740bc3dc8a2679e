//! Employee entity model.

use corpdir_core::types::EntityId;
use sqlx::FromRow;

/// A row from the `employees` table. Always belongs to exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub age: i32,
    pub position: String,
    pub company_id: EntityId,
}
