use std::path::PathBuf;

use anyhow::{Context, Result};

use distmodel::application::{load_document, Pipeline};
use distmodel::domain::services::render_tree;
use distmodel::infrastructure::{atomic_write, encode_pretty, LocalFs};
use distmodel::presentation::output::emit;
use distmodel::presentation::{create_sink, OutputFormat};

pub fn cmd_flatten(input: PathBuf, path: String, output: Option<PathBuf>, json: bool) -> Result<()> {
    let (mut vfs, root) = load_document(&input)
        .with_context(|| format!("failed to load {}", input.display()))?;

    let sink = create_sink(OutputFormat::from_json_flag(json));
    let fs = LocalFs::new();
    let flat = Pipeline::new(&fs, &sink).flatten_path(&mut vfs, root, &path)?;

    match output {
        Some(output) => {
            let mut buffer = Vec::new();
            encode_pretty(&vfs, flat, &mut buffer)?;
            atomic_write(&output, &buffer)
                .with_context(|| format!("failed to write {}", output.display()))?;
            if json {
                emit(serde_json::json!({
                    "event": "complete",
                    "command": "flatten",
                    "output": output.display().to_string(),
                    "nodes": vfs.node_count(flat),
                    "diagnostics": sink.len(),
                }))?;
            }
        }
        None if json => {
            emit(serde_json::json!({
                "event": "complete",
                "command": "flatten",
                "report": render_tree(&vfs, flat, &fs),
                "nodes": vfs.node_count(flat),
                "diagnostics": sink.len(),
            }))?;
        }
        None => print!("{}", render_tree(&vfs, flat, &fs)),
    }
    Ok(())
}
