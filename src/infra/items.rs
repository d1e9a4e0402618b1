//! File adapters for approved items and rendered plans.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tracing::debug;

use super::error::InfraError;
use crate::domain::types::ContentItem;

/// Read a JSON array of content items.
pub fn load_items(path: &Path) -> Result<Vec<ContentItem>, InfraError> {
    let raw = fs::read_to_string(path).map_err(|err| InfraError::read(path, err))?;
    let items: Vec<ContentItem> =
        serde_json::from_str(&raw).map_err(|err| InfraError::json(path, err))?;

    debug!(
        target = "infra::items::load_items",
        path = %path.display(),
        count = items.len(),
        "content items loaded"
    );

    Ok(items)
}

/// Write rendered output to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<(), InfraError> {
    match path {
        Some(path) => {
            fs::write(path, ensure_trailing_newline(contents))
                .map_err(|err| InfraError::write(path, err))?;
            debug!(
                target = "infra::items::write_output",
                path = %path.display(),
                bytes = contents.len(),
                "output written"
            );
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(ensure_trailing_newline(contents).as_bytes())?;
            handle.flush()?;
            Ok(())
        }
    }
}

fn ensure_trailing_newline(contents: &str) -> String {
    if contents.ends_with('\n') {
        contents.to_string()
    } else {
        format!("{contents}\n")
    }
}
