use crate::modules::user::domain::{NewUser, User, UserChanges};
use crate::modules::user::entity;
use crate::transactional::TransactionManager;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,

    #[error("email already exists")]
    DuplicateEmail,

    /// The transaction was rolled back; nothing was written.
    #[error("{0}")]
    WriteFailed(String),

    #[error("{0}")]
    ReadFailed(String),
}

impl StoreError {
    fn read(err: DbErr) -> Self {
        StoreError::ReadFailed(err.to_string())
    }
}

// Everything that fails inside a write transaction counts as a failed write.
impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::DuplicateEmail,
            _ => StoreError::WriteFailed(err.to_string()),
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> StoreResult<User>;
    async fn fetch(&self, id: i32) -> StoreResult<Option<User>>;
    /// All users, ordered by id.
    async fn list(&self) -> StoreResult<Vec<User>>;
    async fn update(&self, id: i32, changes: UserChanges) -> StoreResult<User>;
    async fn delete(&self, id: i32) -> StoreResult<()>;
}

pub struct SeaOrmUserStore {
    transactions: TransactionManager,
}

impl SeaOrmUserStore {
    pub fn new(transactions: TransactionManager) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl UserStore for SeaOrmUserStore {
    async fn insert(&self, new_user: NewUser) -> StoreResult<User> {
        let tx = self.transactions.begin().await?;
        let outcome = insert_user(tx.conn(), new_user).await;
        tx.finish(outcome).await
    }

    async fn fetch(&self, id: i32) -> StoreResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(self.transactions.connection())
            .await
            .map_err(StoreError::read)?;
        Ok(model.map(User::from))
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.transactions.connection())
            .await
            .map_err(StoreError::read)?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i32, changes: UserChanges) -> StoreResult<User> {
        let tx = self.transactions.begin().await?;
        let outcome = update_user(tx.conn(), id, changes).await;
        tx.finish(outcome).await
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let tx = self.transactions.begin().await?;
        let outcome = delete_user(tx.conn(), id).await;
        tx.finish(outcome).await
    }
}

async fn email_taken<C>(conn: &C, email: &str, except: Option<i32>) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let mut query = entity::Entity::find().filter(entity::Column::Email.eq(email));
    if let Some(id) = except {
        query = query.filter(entity::Column::Id.ne(id));
    }
    Ok(query.one(conn).await?.is_some())
}

async fn insert_user<C>(conn: &C, new_user: NewUser) -> StoreResult<User>
where
    C: ConnectionTrait,
{
    if email_taken(conn, &new_user.email, None).await? {
        return Err(StoreError::DuplicateEmail);
    }

    let model = entity::ActiveModel {
        username: Set(new_user.username),
        email: Set(new_user.email),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    tracing::info!(user_id = model.id, "Created user");
    Ok(model.into())
}

async fn update_user<C>(conn: &C, id: i32, changes: UserChanges) -> StoreResult<User>
where
    C: ConnectionTrait,
{
    let Some(model) = entity::Entity::find_by_id(id).one(conn).await? else {
        return Err(StoreError::NotFound);
    };

    if let Some(email) = &changes.email {
        if email_taken(conn, email, Some(id)).await? {
            return Err(StoreError::DuplicateEmail);
        }
    }

    if changes.is_empty() {
        return Ok(model.into());
    }

    let mut active = model.into_active_model();
    if let Some(username) = changes.username {
        active.username = Set(username);
    }
    if let Some(email) = changes.email {
        active.email = Set(email);
    }
    let model = active.update(conn).await?;

    tracing::info!(user_id = model.id, "Updated user");
    Ok(model.into())
}

async fn delete_user<C>(conn: &C, id: i32) -> StoreResult<()>
where
    C: ConnectionTrait,
{
    let result = entity::Entity::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(StoreError::NotFound);
    }

    tracing::info!(user_id = id, "Deleted user");
    Ok(())
}
