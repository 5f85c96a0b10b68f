pub mod loader;
pub mod models;

pub use loader::{ProfileApiClient, ProfileError};
pub use models::UserProfile;
