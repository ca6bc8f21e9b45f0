//! Foundation values for the Sysmac toolchain.
//!
//! This module provides the fixed vocabulary shared by every layer:
//! - [`constants`] - File markers, publication flags, extensions, defaults
//!
//! This module has NO dependencies on other sysmac modules.

pub mod constants;
