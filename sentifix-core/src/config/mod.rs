pub mod config;


pub use config::{ResourceSources, SentifixConfig};
