//! Application bootstrap and shutdown.
//!
//! ```text
//! 1. Configuration Loading
//!    ↓
//! 2. Database connection + schema sync
//!    ↓
//! 3. Router assembly
//!    ↓
//! 4. Server Start
//!    ↓
//! [Running...]
//!    ↓
//! 5. Shutdown Signal (SIGTERM/SIGINT), in-flight requests drain
//!    ↓
//! 6. Connection pool closed
//! ```

mod application;
mod error;
mod shutdown;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use shutdown::shutdown_signal;
