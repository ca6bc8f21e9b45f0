//! Readers for the Sysmac Studio on-disk formats.
//!
//! - [`XmlElement`] - A small owned element tree built with quick-xml
//! - [`parse_data_types`] - `DataType` declaration files
//! - [`parse_global_variables`] - The line-oriented global-variable dump

mod data_types;
mod error;
mod variables;
mod xml;

pub use data_types::{declaration_from_element, parse_data_types};
pub use error::ParseError;
pub use variables::{parse_dump_line, parse_global_variables};
pub use xml::{Descendants, XmlElement};
