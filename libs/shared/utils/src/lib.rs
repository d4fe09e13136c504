pub mod session_store;
pub mod test_utils;

pub use session_store::{SessionStore, SessionStoreError, StoredSession};
