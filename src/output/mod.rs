// SPDX-License-Identifier: GPL-3.0-or-later
//! Output generation for the map listing and the declarations artifact.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

pub mod defs;
pub mod maps;
pub mod writer;

pub use defs::generate_register_defs;
pub use maps::generate_map_listing;
pub use writer::ListingWriter;

/// Create an output file with a standardized error message.
pub fn create_output_file(path: &Path, description: &str) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create {} {:?}", description, path))
}
