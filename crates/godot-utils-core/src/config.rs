//! Generator settings.
//!
//! The defaults match a stock Godot project: the project file is
//! `project.godot` and the consumed sections are `[input]` and
//! `[layer_names]`. The project file location may be overridden with the
//! `GODOT_PROJECT_FILE` environment variable.

use std::env::var_os;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const PROJECT_FILE: &str = "project.godot";
pub const PROJECT_FILE_VAR: &str = "GODOT_PROJECT_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub project_file: PathBuf,
    pub input_section: String,
    pub input_module: String,
    pub layer_section: String,
    pub layer_module: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_file: PathBuf::from(PROJECT_FILE),
            input_section: "input".to_string(),
            input_module: "input_name".to_string(),
            layer_section: "layer_names".to_string(),
            layer_module: "layer".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Default settings with `GODOT_PROJECT_FILE` applied, if set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| var_os(key))
    }

    /// Default settings with the project file taken from `lookup`, if it has one.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let config = Self::default();
        match lookup(PROJECT_FILE_VAR) {
            Some(path) if !path.is_empty() => config.with_project_file(path),
            _ => config,
        }
    }

    #[must_use]
    pub fn with_project_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_file = path.into();
        self
    }

    #[must_use]
    pub fn with_input_module(mut self, module: impl Into<String>) -> Self {
        self.input_module = module.into();
        self
    }

    #[must_use]
    pub fn with_layer_module(mut self, module: impl Into<String>) -> Self {
        self.layer_module = module.into();
        self
    }

    /// The project file location, anchored at `base` when relative.
    #[must_use]
    pub fn resolve_project_file(&self, base: &Path) -> PathBuf {
        if self.project_file.is_absolute() {
            self.project_file.clone()
        } else {
            base.join(&self.project_file)
        }
    }

    /// The bare file name hosts match additional files against.
    #[must_use]
    pub fn project_file_name(&self) -> &Path {
        self.project_file
            .file_name()
            .map_or_else(|| Path::new(PROJECT_FILE), Path::new)
    }
}
