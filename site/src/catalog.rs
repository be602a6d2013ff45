use std::{collections::BTreeMap, fmt};

use anyhow::{Context, bail};
use serde::Deserialize;
use tracing::debug;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// a portfolio entry, as shown on the project cards and in the detail modal
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub live_url: String,
}

#[derive(Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    project: Vec<Project>,
}

// read-only project lookup
//
// built once at startup and handed to whatever needs it; there is intentionally no
// way to mutate it afterwards
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: BTreeMap<ProjectId, Project>,
}

impl Catalog {
    pub fn new(projects: impl IntoIterator<Item = Project>) -> anyhow::Result<Self> {
        let mut map = BTreeMap::new();

        for project in projects {
            let id = project.id;
            if map.insert(id, project).is_some() {
                bail!("duplicate project id {id}");
            }
        }

        Ok(Catalog { projects: map })
    }

    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let doc: CatalogDoc = toml::from_str(doc).context("failed to parse project catalog")?;

        let catalog = Catalog::new(doc.project)?;

        debug!({ projects = catalog.len() }, "loaded project catalog");

        Ok(catalog)
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(id: u32, features: &[&str]) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {id}"),
            description: String::from("short"),
            full_description: String::from("long"),
            features: features.iter().map(|s| s.to_string()).collect(),
            technologies: vec![String::from("HTML5"), String::from("CSS3")],
            live_url: format!("https://example.com/{id}"),
        }
    }

    #[test]
    fn parses_project_tables_in_id_order() {
        let catalog = Catalog::from_toml(
            r#"
            [[project]]
            id = 2
            title = "A.K.A.S.A.D.O.K"
            description = "Portfólio visual profissional"
            full_description = "Criamos um portfólio artístico imersivo."
            features = ["Galeria de obras interativa", "Biografia detalhada"]
            technologies = ["HTML5", "CSS3"]
            live_url = "https://akasadokk.github.io/site"

            [[project]]
            id = 1
            title = "PAPO COM INGLÊS"
            description = "Plataforma educacional"
            full_description = "Plataforma educacional completa."
            features = ["Área do aluno personalizada"]
            technologies = ["PHP", "MySQL"]
            live_url = "https://papocomingles.github.io/site"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);

        let ids: Vec<_> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProjectId(1), ProjectId(2)]);

        let akasadok = catalog.get(ProjectId(2)).unwrap();
        assert_eq!(akasadok.features.len(), 2);
        assert_eq!(akasadok.live_url, "https://akasadokk.github.io/site");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new([project(3, &[]), project(3, &[])]).unwrap_err();

        assert!(err.to_string().contains("duplicate project id 3"));
    }

    #[test]
    fn missing_id_is_none() {
        let catalog = Catalog::new([project(1, &["a"])]).unwrap();

        assert!(catalog.get(ProjectId(99)).is_none());
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = Catalog::from_toml("").unwrap();

        assert!(catalog.is_empty());
    }
}
