use std::path::{Path, PathBuf};

use crate::hir::{Resolution, TypeDictionary, resolve_published_symbols};
use crate::parser::{self, XmlElement};
use crate::syntax::GlobalVariable;

use super::error::ProjectError;
use super::layout::{self, CHILD_ENTITIES, ENTITY, is_entity};
use super::metadata::ProjectInfo;

/// One Sysmac Studio project inside a solution root.
///
/// Opening reads only the metadata. Declarations are read on demand, so a
/// project picker can list many projects cheaply.
#[derive(Clone, Debug)]
pub struct Project {
    dir: PathBuf,
    info: ProjectInfo,
}

impl Project {
    /// Open the project directory `root/uuid`.
    pub fn open(root: impl AsRef<Path>, uuid: &str) -> Result<Self, ProjectError> {
        let dir = root.as_ref().join(uuid);
        if !dir.is_dir() {
            return Err(ProjectError::io(
                &dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "project directory not found"),
            ));
        }
        let info = ProjectInfo::read(&dir, uuid);
        Ok(Self { dir, info })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn info(&self) -> &ProjectInfo {
        &self.info
    }

    pub fn uuid(&self) -> &str {
        &self.info.uuid
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn entity_index_path(&self) -> PathBuf {
        layout::entity_index_path(&self.dir, &self.info.uuid)
    }

    fn entity_index(&self) -> Result<XmlElement, ProjectError> {
        layout::read_xml(&self.entity_index_path())
    }

    /// Build the type dictionary from every data-type file of the project.
    ///
    /// Files are read in entity-index order; a later declaration replaces
    /// an earlier one with the same qualified name.
    pub fn type_dictionary(&self) -> Result<TypeDictionary, ProjectError> {
        let index = self.entity_index()?;
        let mut dictionary = TypeDictionary::new();

        let groups = index
            .descendants()
            .filter(|e| is_entity(e, "Group", Some("IecData")));
        for group in groups {
            let Some(children) = group.children_named(CHILD_ENTITIES).next() else {
                tracing::debug!("{}: IecData group without children", self.uuid());
                continue;
            };
            for entity in children
                .children_named(ENTITY)
                .filter(|e| e.has_attr("type", "DataType"))
            {
                let id = entity.attr("id").ok_or_else(|| {
                    ProjectError::parse(
                        self.entity_index_path(),
                        parser::ParseError::missing_attribute("DataType/@id"),
                    )
                })?;
                let path = layout::entity_file_path(&self.dir, id);
                let bytes = std::fs::read(&path).map_err(|e| ProjectError::io(&path, e))?;
                let declarations = parser::parse_data_types(&bytes, entity.attr("namespace"))
                    .map_err(|e| ProjectError::parse(&path, e))?;
                tracing::trace!("{}: {} types", path.display(), declarations.len());
                dictionary.extend(declarations);
            }
        }

        tracing::debug!("{}: {} types declared", self.uuid(), dictionary.len());
        Ok(dictionary)
    }

    /// Read the global-variable dump.
    pub fn global_variables(&self) -> Result<Vec<GlobalVariable>, ProjectError> {
        let index_path = self.entity_index_path();
        let index = layout::read_xml(&index_path)?;
        let id = index
            .descendants()
            .find(|e| is_entity(e, "Variables", Some("Global")))
            .and_then(|e| e.attr("id"))
            .ok_or_else(|| ProjectError::missing_entity(&index_path, "global variables"))?;

        let path = layout::entity_file_path(&self.dir, id);
        let text = layout::read_text(&path)?;
        let variables =
            parser::parse_global_variables(&text).map_err(|e| ProjectError::parse(&path, e))?;
        tracing::debug!("{}: {} global variables", self.uuid(), variables.len());
        Ok(variables)
    }

    /// Resolve the published globals into sorted primitive leaves.
    pub fn published_symbols(&self) -> Result<Resolution, ProjectError> {
        let dictionary = self.type_dictionary()?;
        let globals = self.global_variables()?;
        resolve_published_symbols(&dictionary, &globals).map_err(|source| ProjectError::Resolve {
            project: self.info.display_name().to_string(),
            source,
        })
    }
}
