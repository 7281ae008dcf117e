//! One full pipeline run: parse → resolve → build → enrich → emit.
//!
//! Synchronous end to end; each run builds everything fresh from the current
//! input and nothing persists between runs.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::emit;
use crate::error::OrgError;
use crate::parse;
use crate::resolve;
use crate::tree;

/// Read the org description, run every phase, and write the HTML artifact.
/// Any error aborts the run before the output file is touched.
pub fn build(input: &Path, output: &Path) -> Result<(), OrgError> {
    let text = fs::read_to_string(input).map_err(|e| OrgError::Io {
        path: input.to_path_buf(),
        source: e,
    })?;

    let org_file = parse::parse(&text)?;
    let resolved = resolve::resolve(&org_file.org)?;
    debug!(
        roles = resolved.roles.len(),
        roots = resolved.roots.len(),
        "hierarchy resolved"
    );

    let mut forest = tree::build_forest(&org_file.org, &resolved)?;
    tree::enrich(&mut forest);

    let payload = emit::payload(&org_file.org, forest);
    let html = emit::render_html(&payload)?;

    write_atomic(output, &html)?;
    info!(output = %output.display(), "org tree written");
    Ok(())
}

/// Complete-or-absent artifact: write a sibling temp file, then rename over
/// the destination, so an interrupted run never leaves a truncated page.
fn write_atomic(path: &Path, contents: &str) -> Result<(), OrgError> {
    let io = |e: std::io::Error| OrgError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io)?;
        }
    }

    let tmp = path.with_extension("html.tmp");
    fs::write(&tmp, contents).map_err(io)?;
    fs::rename(&tmp, path).map_err(io)?;
    Ok(())
}
