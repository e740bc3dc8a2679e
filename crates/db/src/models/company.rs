//! Company entity model.

use corpdir_core::types::EntityId;
use sqlx::FromRow;

/// A row from the `companies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Company {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub country: String,
}
