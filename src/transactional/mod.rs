use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// Begins transactions on the shared connection pool.
#[derive(Clone)]
pub struct TransactionManager {
    conn: DatabaseConnection,
}

impl TransactionManager {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The pool itself, for reads that do not need a transaction.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub async fn begin(&self) -> Result<Transaction, DbErr> {
        tracing::debug!("Beginning transaction");
        let inner = self.conn.begin().await?;
        Ok(Transaction { inner })
    }
}

/// An open transaction. Dropping it without calling [`Transaction::finish`]
/// rolls it back.
pub struct Transaction {
    inner: DatabaseTransaction,
}

impl Transaction {
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.inner
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        tracing::debug!("Committing transaction");
        self.inner.commit().await
    }

    pub async fn rollback(self) -> Result<(), DbErr> {
        tracing::debug!("Rolling back transaction");
        self.inner.rollback().await
    }

    /// Commit when `outcome` is `Ok`, roll back otherwise.
    ///
    /// A failed commit replaces the successful outcome with its error. A
    /// failed rollback is logged and the original error is returned.
    pub async fn finish<T, E>(self, outcome: Result<T, E>) -> Result<T, E>
    where
        E: From<DbErr>,
    {
        match outcome {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = self.rollback().await {
                    tracing::error!("Rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
