pub mod build_modules;
pub mod clone_repositories;
pub mod link_modules;
pub mod recycle_app_pool;
pub mod update_repositories;
