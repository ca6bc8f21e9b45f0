//! Project loading: solution discovery, metadata and declaration files.
//!
//! A solution root holds one directory per project, named by its uuid.
//! The `<uuid>.oem` entity index points at the data-type files and at the
//! global-variable dump; `<uuid>.xml` carries the descriptive properties.

mod discovery;
mod error;
mod layout;
mod metadata;
mod solution;

pub use discovery::{SolutionRoot, discover_projects};
pub use error::ProjectError;
pub use metadata::{ProjectInfo, parse_timestamp};
pub use solution::Project;

#[cfg(test)]
mod tests;
