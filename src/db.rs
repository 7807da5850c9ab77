pub mod fixtures;
pub mod portal_store;
pub use portal_store::{PortalData, PortalStore};
pub mod session_repo;
pub use session_repo::{SessionHandle, SessionRepository};
