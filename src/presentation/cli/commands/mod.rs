pub mod build_modules;
pub mod init;
pub mod mklinks;
pub mod restart_iis;
pub mod update;

pub use build_modules::BuildModulesCommand;
pub use init::InitCommand;
pub use mklinks::MklinksCommand;
pub use restart_iis::RestartIisCommand;
pub use update::UpdateCommand;
