//! A unit of work: one transaction whose staged changes become visible only
//! when [`UnitOfWork::save`] commits them.
//!
//! Repository methods accept any executor. Passing the pool runs a read-only
//! fetch outside a transaction; passing [`UnitOfWork::conn`] stages a change.
//! Dropping a unit of work without saving rolls everything back.

use sqlx::Transaction;

use crate::{Db, DbConnection, DbPool};

pub struct UnitOfWork {
    tx: Transaction<'static, Db>,
}

impl UnitOfWork {
    pub async fn begin(pool: &DbPool) -> Result<Self, sqlx::Error> {
        Ok(Self {
            tx: pool.begin().await?,
        })
    }

    /// Connection to stage changes on.
    pub fn conn(&mut self) -> &mut DbConnection {
        &mut *self.tx
    }

    /// Commit every staged change atomically.
    pub async fn save(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}
