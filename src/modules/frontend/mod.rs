//! SPA hosting: every unmatched GET is answered from the static directory.

mod controller;
mod static_files;

pub use controller::FrontendController;
pub use static_files::StaticFiles;
