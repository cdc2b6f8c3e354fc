pub mod config_store;
pub mod link_store;

pub use config_store::{ConfigStore, ConfigStoreError};
