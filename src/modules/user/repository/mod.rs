mod user_repository;

pub use user_repository::{SeaOrmUserStore, StoreError, StoreResult, UserStore};
