//! Fixed informational documents served under `/api`.

mod controller;

pub use controller::{InfoController, SERVICE_VERSION};
