// File: crates/chart-core/src/skills.rs
// Summary: Skill directory convention check: every skill subdirectory carries a README.md.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SkillError;

pub const README: &str = "README.md";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    pub path: PathBuf,
    pub has_readme: bool,
}

/// Subdirectories of a skills directory, sorted by name. Plain files at the
/// top level are not skills and are skipped.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    pub skills: Vec<SkillEntry>,
}

impl SkillCatalog {
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self, SkillError> {
        let dir = dir.as_ref();
        let io_err = |source| SkillError::Io { path: dir.to_path_buf(), source };

        let mut skills = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let has_readme = path.join(README).is_file();
            skills.push(SkillEntry { name, path, has_readme });
        }
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { skills })
    }

    pub fn missing_readmes(&self) -> Vec<&str> {
        self.skills.iter().filter(|s| !s.has_readme).map(|s| s.name.as_str()).collect()
    }

    pub fn ensure_complete(&self) -> Result<(), SkillError> {
        let missing = self.missing_readmes();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SkillError::MissingReadme(missing.into_iter().map(String::from).collect()))
        }
    }
}
