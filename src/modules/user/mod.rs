pub mod controller;
pub mod domain;
pub mod entity;
pub mod repository;
pub mod service;

pub use controller::UserController;
pub use domain::{NewUser, User, UserChanges};
pub use repository::{SeaOrmUserStore, StoreError, UserStore};
pub use service::UserService;
