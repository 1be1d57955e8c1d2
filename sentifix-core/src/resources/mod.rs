pub mod archive;
pub mod manager;


pub use archive::extract_archive;
pub use manager::{ResourceKind, ResourceManager, ResourceStatus};
