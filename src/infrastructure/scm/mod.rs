/// SCM (Source Control Management) operations infrastructure
///
/// `ScmOperations` is the seam the clone and update use cases depend on;
/// `GitScm` implements it on top of the `git` executable.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{ScmError, ScmOperations};

#[cfg(test)]
pub use scm_interface::MockScmOperations;
