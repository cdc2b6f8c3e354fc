//! Test fixtures for configuration directories and working copies

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary configuration directory with its own repositories and
/// modules roots
pub struct ConfigDirFixture {
    temp_dir: TempDir,
    repositories: Vec<serde_json::Value>,
    appcmd: String,
    apppool: String,
    nuget: String,
    msbuild: String,
}

impl ConfigDirFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
            repositories: Vec::new(),
            appcmd: "appcmd".to_string(),
            apppool: "DefaultAppPool".to_string(),
            nuget: "nuget".to_string(),
            msbuild: "msbuild".to_string(),
        }
    }

    pub fn with_repository(mut self, name: &str, kind: &str) -> Self {
        self.repositories.push(json!({
            "name": name,
            "url": format!("https://git.example.com/platform/{}.git", name),
            "type": kind,
        }));
        self
    }

    pub fn with_module(self, name: &str) -> Self {
        self.with_repository(name, "module")
    }

    pub fn with_server_tool(mut self, appcmd: &str, apppool: &str) -> Self {
        self.appcmd = appcmd.to_string();
        self.apppool = apppool.to_string();
        self
    }

    pub fn with_build_tools(mut self, nuget: &str, msbuild: &str) -> Self {
        self.nuget = nuget.to_string();
        self.msbuild = msbuild.to_string();
        self
    }

    /// Write every configuration file and create both roots
    pub fn write(self) -> Self {
        fs::create_dir_all(self.repositories_root()).expect("create repositories root");
        fs::create_dir_all(self.modules_root()).expect("create modules root");

        self.write_json("repositories.json", &json!(self.repositories));
        self.write_json(
            "directories.json",
            &json!({
                "repositoriesRoot": self.repositories_root(),
                "platformModulesRoot": self.modules_root(),
            }),
        );
        self.write_json(
            "iis-settings.json",
            &json!({ "appcmdPath": self.appcmd, "apppool": self.apppool }),
        );
        self.write_json(
            "build-settings.json",
            &json!({ "nugetPath": self.nuget, "msbuildPath": self.msbuild }),
        );
        self.write_json(
            "secrets.json",
            &json!({ "username": "builder", "password": "s3cret" }),
        );
        self
    }

    pub fn write_json(&self, file_name: &str, value: &serde_json::Value) {
        let content = serde_json::to_string_pretty(value).expect("serialize fixture");
        fs::write(self.config_dir().join(file_name), content).expect("write fixture");
    }

    pub fn remove_file(&self, file_name: &str) {
        fs::remove_file(self.config_dir().join(file_name)).expect("remove fixture file");
    }

    pub fn config_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn repositories_root(&self) -> PathBuf {
        self.temp_dir.path().join("repos")
    }

    pub fn modules_root(&self) -> PathBuf {
        self.temp_dir.path().join("platform").join("Modules")
    }

    pub fn repository_path(&self, name: &str) -> PathBuf {
        self.repositories_root().join(name)
    }

    /// Create a working copy on disk with the given subdirectories
    pub fn create_working_copy(&self, name: &str, subdirectories: &[&str]) -> PathBuf {
        let path = self.repository_path(name);
        fs::create_dir_all(&path).expect("create working copy");
        for subdirectory in subdirectories {
            fs::create_dir_all(path.join(subdirectory)).expect("create subdirectory");
        }
        path
    }
}

impl Default for ConfigDirFixture {
    fn default() -> Self {
        Self::new()
    }
}
