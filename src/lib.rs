//! # devsetup - Developer Environment Setup
//!
//! `devsetup` prepares a developer machine that works on a fixed set of
//! repositories: it clones them, keeps their `dev` and `qa` branches current,
//! links the web parts of module repositories into the platform modules
//! directory, recycles the IIS application pool and builds every module.
//!
//! ## Commands
//!
//! | Token           | Effect                                                     |
//! |-----------------|------------------------------------------------------------|
//! | `init`          | Clone every repository that is not on disk yet             |
//! | `update`        | Pull `dev` then `qa` from `origin` into every working copy |
//! | `mklinks`       | Link `<repo>/<X>Web` to `<platformModulesRoot>/<repo>`     |
//! | `restart-iis`   | Run `appcmd recycle apppool /apppool.name:<pool>`          |
//! | `build-modules` | Run the package restore tool, then the build tool          |
//!
//! ## Configuration
//!
//! All settings are read from JSON files in the configuration directory
//! (`--config-dir`, `DEVSETUP_CONFIG_DIR`, or the current directory):
//!
//! - `repositories.json`: `[{ "name": ..., "url": ..., "type": "module" }]`
//! - `directories.json`: `{ "repositoriesRoot": ..., "platformModulesRoot": ... }`
//! - `iis-settings.json`: `{ "appcmdPath": ..., "apppool": ... }`
//! - `build-settings.json`: `{ "nugetPath": ..., "msbuildPath": ... }`
//! - `secrets.json`: `{ "username": ..., "password": ... }`
//!
//! ## Architecture
//!
//! - [`domain`]: configuration entities and value objects
//! - [`application`]: one use case per command
//! - [`infrastructure`]: git, process and filesystem adapters
//! - [`presentation`]: the command line interface
//! - [`common`]: shared error handling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use devsetup::application::use_cases::clone_repositories::CloneRepositoriesUseCase;
//! use devsetup::infrastructure::{ConfigStore, GitScm};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let environment = ConfigStore::new(".").load()?;
//! let report = CloneRepositoriesUseCase::new(&environment, Arc::new(GitScm::new()))
//!     .execute()
//!     .await;
//!
//! println!("Cloned {} repositories", report.cloned_count());
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use crate::common::error::DevSetupError;
pub use crate::common::result::DevSetupResult as Result;
