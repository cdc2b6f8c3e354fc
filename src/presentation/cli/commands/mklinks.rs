use anyhow::Result;

use crate::application::use_cases::link_modules::LinkModulesUseCase;
use crate::common::error::DevSetupError;
use crate::domain::entities::Environment;

/// Handler for the mklinks command
///
/// Creating directory links needs administrator rights on Windows.
#[derive(Debug, Default)]
pub struct MklinksCommand;

impl MklinksCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, environment: &Environment) -> Result<()> {
        let links = LinkModulesUseCase::new(environment)
            .execute()
            .map_err(DevSetupError::from)?;

        for link in links {
            println!("{} -> {}", link.link.display(), link.target.display());
        }
        Ok(())
    }
}
