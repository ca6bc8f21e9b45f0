//! On-disk layout of a project directory.
//!
//! ```text
//! <solution root>/<uuid>/
//!     <uuid>.oem      entity index
//!     <uuid>.xml      project properties
//!     <id>.xml        data-type files and the global-variable dump
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::base::constants::{OEM_EXTENSION, XML_EXTENSION};
use crate::parser::XmlElement;

use super::error::ProjectError;

/// `Entity` element name in the entity index.
pub(crate) const ENTITY: &str = "Entity";
/// Container of the data-type entities of a group.
pub(crate) const CHILD_ENTITIES: &str = "ChildEntities";

pub(crate) fn entity_index_path(dir: &Path, uuid: &str) -> PathBuf {
    dir.join(format!("{uuid}.{OEM_EXTENSION}"))
}

pub(crate) fn properties_path(dir: &Path, uuid: &str) -> PathBuf {
    dir.join(format!("{uuid}.{XML_EXTENSION}"))
}

/// Path of the file behind an entity id.
pub(crate) fn entity_file_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{id}.{XML_EXTENSION}"))
}

pub(crate) fn read_xml(path: &Path) -> Result<XmlElement, ProjectError> {
    let bytes = fs::read(path).map_err(|e| ProjectError::io(path, e))?;
    XmlElement::parse(&bytes).map_err(|e| ProjectError::parse(path, e))
}

pub(crate) fn read_text(path: &Path) -> Result<String, ProjectError> {
    fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))
}

/// True for an `Entity` element with the given `type` (and `subtype`).
pub(crate) fn is_entity(element: &XmlElement, kind: &str, subtype: Option<&str>) -> bool {
    element.name == ENTITY
        && element.has_attr("type", kind)
        && subtype.is_none_or(|s| element.has_attr("subtype", s))
}
