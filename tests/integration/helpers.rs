//! Shared test helpers: a temp project with the standard data/ layout

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use s4a_dict::config::Project;

pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        for sub in ["data/attributes", "data/objects", "data/views"] {
            fs::create_dir_all(dir.path().join(sub)).expect("Failed to create data dir");
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write test file");
        self
    }

    pub fn attribute(&self, file: &str, content: &str) -> &Self {
        self.write(&format!("data/attributes/{file}"), content)
    }

    pub fn object(&self, file: &str, content: &str) -> &Self {
        self.write(&format!("data/objects/{file}"), content)
    }

    pub fn view(&self, file: &str, content: &str) -> &Self {
        self.write(&format!("data/views/{file}"), content)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn project(&self) -> Project {
        Project::open(self.root()).expect("Failed to open project")
    }
}

/// Minimal attribute record
pub fn attribute_yaml(id: &str, name: &str, source: &str) -> String {
    format!(
        "id: {id}\nname: {name}\ndescription: Attribute representing {name}.\ndataType: String\nsource: {source}\nstatus: draft\n"
    )
}

/// View referencing `names` as bare strings
pub fn view_yaml(title: &str, names: &[&str]) -> String {
    let mut yaml = format!("Title: {title}\nDescription: Test view\nIncludedAttributes:\n");
    for name in names {
        yaml.push_str(&format!("  - \"{name}\"\n"));
    }
    yaml
}
