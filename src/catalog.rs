use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROJECTS_FILE: &str = "projects.json";

pub static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::embedded().expect("Embedded project catalog should be valid"));

#[derive(Embed)]
#[folder = "data"]
pub struct Data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoType {
    #[default]
    LiveDemo,
    Game,
    Screenshot,
}

/// Share of a project's source written in one language. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percent: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub demo_image: Option<String>,
    #[serde(default)]
    pub demo_gradient: String,
    #[serde(default)]
    pub demo_type: DemoType,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(alias = "technologies")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub languages: Vec<LanguageShare>,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Project catalog file not found: {0}")]
    Missing(&'static str),
    #[error("Project catalog is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("Couldn't parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Project at position {0} has an empty title")]
    EmptyTitle(usize),
    #[error("Project \"{0}\" has no tags")]
    NoTags(String),
    #[error("Duplicate project title \"{0}\"")]
    DuplicateTitle(String),
}

/// Ordered, read-only list of projects shown on the site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut titles = HashSet::new();
        let projects = projects
            .into_iter()
            .enumerate()
            .map(|(i, mut p)| {
                if p.title.trim().is_empty() {
                    return Err(CatalogError::EmptyTitle(i));
                }
                if p.tags.is_empty() {
                    return Err(CatalogError::NoTags(p.title));
                }
                if !titles.insert(p.title.clone()) {
                    return Err(CatalogError::DuplicateTitle(p.title));
                }
                // keep first occurrence so chip order matches the source data
                let mut seen = HashSet::new();
                p.tags.retain(|t| seen.insert(t.clone()));
                Ok(p)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { projects })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects = serde_json::from_str::<Vec<Project>>(json)?;
        Self::new(projects)
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        let file = Data::get(PROJECTS_FILE).ok_or(CatalogError::Missing(PROJECTS_FILE))?;
        let json = std::str::from_utf8(&file.data)?;
        Self::from_json(json)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert!(!catalog.is_empty());
        assert!(catalog.projects().iter().all(|p| !p.tags.is_empty()));

        let titles = catalog
            .projects()
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert!(titles.contains(&"Python Static Code Analyzer"));
        assert!(titles.contains(&"Pacman Q-Learning Agent"));
    }

    #[test]
    fn test_optional_fields_default() {
        let catalog = Catalog::from_json(r#"[{"title": "A", "description": "", "tags": ["Rust"]}]"#)
            .expect("minimal project should parse");
        let p = &catalog.projects()[0];
        assert_eq!(p.demo_type, DemoType::LiveDemo);
        assert!(p.code.is_none());
        assert!(p.live_link.is_none());
        assert!(p.languages.is_empty());
    }

    #[test]
    fn test_technologies_alias() {
        let catalog = Catalog::from_json(
            r#"[{"title": "A", "description": "", "technologies": ["Go", "gRPC"], "demo_type": "game"}]"#,
        )
        .expect("technologies key should be accepted");
        let p = &catalog.projects()[0];
        assert_eq!(p.tags, vec!["Go", "gRPC"]);
        assert_eq!(p.demo_type, DemoType::Game);
        assert!(p.has_tag("gRPC"));
        assert!(!p.has_tag("grpc"));
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let catalog = Catalog::from_json(
            r#"[{"title": "A", "description": "", "tags": ["React", "Python", "React"]}]"#,
        )
        .unwrap();
        assert_eq!(catalog.projects()[0].tags, vec!["React", "Python"]);
    }

    #[test]
    fn test_languages_are_not_validated() {
        let catalog = Catalog::from_json(
            r#"[{"title": "A", "description": "", "tags": ["Rust"],
                 "languages": [{"name": "Rust", "percent": 80.0}, {"name": "CSS", "percent": 45.5}]}]"#,
        )
        .expect("language shares are display data");
        assert_eq!(catalog.projects()[0].languages.len(), 2);
    }

    #[test]
    fn test_rejects_invalid_catalogs() {
        let no_tags = Catalog::from_json(r#"[{"title": "A", "description": "", "tags": []}]"#);
        assert!(matches!(no_tags, Err(CatalogError::NoTags(t)) if t == "A"));

        let missing_tags = Catalog::from_json(r#"[{"title": "A", "description": ""}]"#);
        assert!(matches!(missing_tags, Err(CatalogError::Parse(_))));

        let empty_title =
            Catalog::from_json(r#"[{"title": " ", "description": "", "tags": ["Rust"]}]"#);
        assert!(matches!(empty_title, Err(CatalogError::EmptyTitle(0))));

        let dup = Catalog::from_json(
            r#"[{"title": "A", "description": "", "tags": ["Rust"]},
                {"title": "A", "description": "", "tags": ["Go"]}]"#,
        );
        assert!(matches!(dup, Err(CatalogError::DuplicateTitle(t)) if t == "A"));

        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::from_json(
            r#"[{"title": "B", "description": "", "tags": ["x"]},
                {"title": "A", "description": "", "tags": ["y"]}]"#,
        )
        .unwrap();
        let titles = catalog
            .projects()
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(catalog.len(), 2);
    }
}
