pub mod types;
mod local;

pub use local::LocalSessionManager;
pub use types::{SessionError, SessionManager, WalletSession};
