//! Project metadata shown by a project picker.
//!
//! Metadata never fails: each source file degrades independently to
//! defaults, with a warning.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::parser::XmlElement;

use super::error::ProjectError;
use super::layout::{self, is_entity};

const PROJECT_TYPE: &str = "ProjectType";
const AUTHOR: &str = "Author";
const DATE_MODIFIED: &str = "DateModified";

/// Descriptive record of one project.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectInfo {
    /// Directory name of the project.
    pub uuid: String,
    /// Solution name from the entity index; empty when unknown.
    pub name: String,
    pub author: String,
    pub project_type: String,
    /// Unix epoch when unknown.
    pub last_modified: DateTime<Utc>,
}

impl ProjectInfo {
    /// Record with every field but the uuid at its default.
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: String::new(),
            author: String::new(),
            project_type: String::new(),
            last_modified: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = project_type.into();
        self
    }

    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Read the metadata of the project stored in `dir`.
    pub fn read(dir: &Path, uuid: &str) -> Self {
        let mut info = Self::new(uuid);

        match layout::read_xml(&layout::properties_path(dir, uuid)) {
            Ok(properties) => info.apply_properties(&properties),
            Err(e) => tracing::warn!("Project {uuid}: properties unavailable ({e})"),
        }

        match read_solution_name(dir, uuid) {
            Ok(name) => info.name = name,
            Err(e) => tracing::warn!("Project {uuid}: name unavailable ({e})"),
        }

        info
    }

    /// Name to show in messages: the solution name, or the uuid.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.uuid
        } else {
            &self.name
        }
    }

    fn apply_properties(&mut self, properties: &XmlElement) {
        let text_of = |name: &str| properties.find(name).map(|e| e.text.clone());

        self.project_type = text_of(PROJECT_TYPE).unwrap_or_default();
        self.author = text_of(AUTHOR).unwrap_or_default();
        if let Some(text) = text_of(DATE_MODIFIED) {
            match parse_timestamp(&text) {
                Some(timestamp) => self.last_modified = timestamp,
                None => tracing::warn!(
                    "Project {}: invalid {DATE_MODIFIED} `{text}`",
                    self.uuid
                ),
            }
        }
    }
}

/// `name` of the `Solution` entity, empty when absent.
fn read_solution_name(dir: &Path, uuid: &str) -> Result<String, ProjectError> {
    let index = layout::read_xml(&layout::entity_index_path(dir, uuid))?;
    Ok(index
        .descendants()
        .find(|e| is_entity(e, "Solution", None))
        .and_then(|e| e.attr("name"))
        .unwrap_or_default()
        .to_string())
}

/// Parse an ISO-8601 timestamp.
///
/// Offsets are converted to UTC; a timestamp without offset, or a bare
/// date, is taken as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
