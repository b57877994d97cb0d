pub mod frontend;
pub mod info;
pub mod user;
