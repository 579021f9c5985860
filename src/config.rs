//! Project configuration.
//!
//! Everything is optional: a project without `dictionary.toml` uses the
//! standard `data/` + `content/` layout and `ATTR-100` style identifiers.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the optional per-project configuration
pub const CONFIG_FILE: &str = "dictionary.toml";

/// Directory whose presence marks a project root during discovery
pub const DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub identifiers: IdScheme,
}

/// Collection directories, relative to the project root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub attributes: PathBuf,
    pub objects: PathBuf,
    pub views: PathBuf,
    pub content: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            attributes: PathBuf::from("data/attributes"),
            objects: PathBuf::from("data/objects"),
            views: PathBuf::from("data/views"),
            content: PathBuf::from("content"),
        }
    }
}

/// Shape of generated attribute identifiers: `{prefix}-{number:0width}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdScheme {
    pub prefix: String,
    pub start: u32,
    pub width: usize,
}

impl Default for IdScheme {
    fn default() -> Self {
        Self {
            prefix: "ATTR".to_string(),
            start: 100,
            width: 3,
        }
    }
}

impl IdScheme {
    pub fn format(&self, number: u32) -> String {
        format!("{}-{:0width$}", self.prefix, number, width = self.width)
    }
}

impl Config {
    /// Load `dictionary.toml` from the project root, or defaults if absent
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }
}

/// Absolute locations of every collection for one project
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub attributes_dir: PathBuf,
    pub objects_dir: PathBuf,
    pub views_dir: PathBuf,
    pub content_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: &Path, paths: &PathsConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            attributes_dir: root.join(&paths.attributes),
            objects_dir: root.join(&paths.objects),
            views_dir: root.join(&paths.views),
            content_dir: root.join(&paths.content),
        }
    }

    pub fn content_subdir(&self, kind: &str) -> PathBuf {
        self.content_dir.join(kind)
    }
}

/// A loaded project: where it lives and how it is configured
#[derive(Debug, Clone)]
pub struct Project {
    pub layout: ProjectLayout,
    pub config: Config,
}

impl Project {
    pub fn open(root: &Path) -> Result<Self> {
        let config = Config::load(root)?;
        let layout = ProjectLayout::new(root, &config.paths);
        Ok(Self { layout, config })
    }

    pub fn root(&self) -> &Path {
        &self.layout.root
    }
}

/// Find the project root by walking up from `start`.
///
/// The first directory containing `data/` or `dictionary.toml` wins.
/// Falls back to `start` itself so a fresh directory still works.
pub fn discover_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(DATA_DIR).is_dir() || current.join(CONFIG_FILE).is_file() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}
