use std::path::PathBuf;

use serde::Serialize;

/// Paths produced by a successful scaffold run.
///
/// Reported to the user and discarded; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldResult {
    pub directory: PathBuf,
    pub component_file: PathBuf,
    pub index_file: PathBuf,
}

impl ScaffoldResult {
    /// Files written, in write order.
    pub fn files(&self) -> [&PathBuf; 2] {
        [&self.component_file, &self.index_file]
    }
}
