//! Export of resolved symbols to HMI tag files.
//!
//! ```text
//! Project → published_symbols() → [ResolvedSymbol] → TagFile → .txt (Windows-1252)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use sysmac::interchange::{TagFile, TagFileOptions, TagLink};
//!
//! let resolution = project.published_symbols()?;
//! TagFile::with_options(TagFileOptions::new().with_tag_link(TagLink::Empty))
//!     .write_to_path("tags.txt", &resolution.symbols)?;
//! ```

mod error;
mod tag_file;

pub use error::InterchangeError;
pub use tag_file::{HEADER, TagFile, TagFileOptions, TagLink, quote};
