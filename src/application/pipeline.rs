//! Artifact generation pipeline
//!
//! ## Flow
//!
//! 1. Decode and link the VFS document
//! 2. Resolve `project_dir/dist_path` and flatten it
//! 3. Apply prune rules to the flattened tree
//! 4. Write the tree report (and optionally the flattened document)
//! 5. Build and write the artifact descriptors

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::{DescriptorKind, DescriptorNode, NodeId, Vfs};
use crate::domain::ports::{Diagnostic, DiagnosticSink, FileSystem};
use crate::domain::services::{apply_prune_rules, render_tree, DescriptorBuilder, Flattener};
use crate::error::DistResult;
use crate::infrastructure::codec::{decode, descriptors_to_vec, encode_pretty};
use crate::infrastructure::fs::atomic_write;

/// Summary of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    /// Nodes in the decoded document
    pub document_nodes: usize,
    /// Nodes in the flattened tree after pruning
    pub flattened_nodes: usize,
    /// Children removed by prune rules
    pub pruned: usize,
    /// Descriptors written, root included
    pub descriptors: usize,
    /// Diagnostics recorded while flattening and describing
    pub diagnostics: usize,
    /// Files written, in order
    pub written: Vec<PathBuf>,
}

/// Read, decode and link a VFS document from disk
pub fn load_document(path: &Path) -> DistResult<(Vfs, NodeId)> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Unified pipeline for flatten + prune + describe.
pub struct Pipeline<'a> {
    fs: &'a dyn FileSystem,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Pipeline<'a> {
    pub fn new(fs: &'a dyn FileSystem, sink: &'a dyn DiagnosticSink) -> Self {
        Self { fs, sink }
    }

    /// Resolve `path` from `root` (creating missing nodes) and flatten it.
    pub fn flatten_path(&self, vfs: &mut Vfs, root: NodeId, path: &str) -> DistResult<NodeId> {
        let start = vfs.resolve_path(root, path)?;
        Ok(Flattener::new(self.fs, self.sink).flatten(vfs, start))
    }

    /// Run the whole pipeline described by `config`.
    pub fn run(&self, config: &Config) -> DistResult<PipelineReport> {
        let sink = CountingSink::new(self.sink);
        let (mut vfs, root) = load_document(&config.input.document)?;
        let document_nodes = vfs.node_count(root);

        let vfs_path = config.input.vfs_path();
        let vfs_path = vfs_path.to_string_lossy();
        let start = vfs.resolve_path(root, &vfs_path)?;
        let flat = Flattener::new(self.fs, &sink).flatten(&mut vfs, start);
        let pruned = apply_prune_rules(&mut vfs, flat, &config.prune);
        tracing::info!(path = %vfs_path, pruned, "flattened tree");

        let output = &config.output;
        let mut written = Vec::new();

        let report_path = output.dir.join(&output.flattened_report);
        atomic_write(&report_path, render_tree(&vfs, flat, self.fs).as_bytes())?;
        written.push(report_path);

        if let Some(name) = &output.flattened_document {
            let path = output.dir.join(name);
            let mut buffer = Vec::new();
            encode_pretty(&vfs, flat, &mut buffer)?;
            atomic_write(&path, &buffer)?;
            written.push(path);
        }

        let root_name = output
            .root_name
            .clone()
            .unwrap_or_else(|| vfs.node(flat).name().to_string());
        let mut descriptors = DescriptorNode::new(DescriptorKind::Dir, root_name);
        DescriptorBuilder::new(self.fs, &sink).add_files(&vfs, &mut descriptors, flat, false);

        let descriptors_path = output.dir.join(&output.descriptors);
        atomic_write(
            &descriptors_path,
            &descriptors_to_vec(&descriptors, output.pretty)?,
        )?;
        written.push(descriptors_path);

        let report = PipelineReport {
            document_nodes,
            flattened_nodes: vfs.node_count(flat),
            pruned,
            descriptors: descriptors.descriptor_count(),
            diagnostics: sink.count(),
            written,
        };
        tracing::info!(
            descriptors = report.descriptors,
            diagnostics = report.diagnostics,
            "wrote artifact descriptors"
        );
        Ok(report)
    }
}

/// Forwards every diagnostic and counts them
struct CountingSink<'a> {
    inner: &'a dyn DiagnosticSink,
    count: AtomicUsize,
}

impl<'a> CountingSink<'a> {
    fn new(inner: &'a dyn DiagnosticSink) -> Self {
        Self {
            inner,
            count: AtomicUsize::new(0),
        }
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl DiagnosticSink for CountingSink<'_> {
    fn record(&self, diagnostic: Diagnostic) {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.inner.record(diagnostic);
    }
}
