//! Filesystem [`GraphEmitter`]
//!
//! Both artifacts are rendered before anything touches the disk. Each one
//! is written to a hidden temporary sibling and renamed into place. Files
//! from an earlier run are moved aside first; if any step fails, every file
//! this emitter created is removed and the earlier files are restored.

use super::render::renderer_for;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use votegraph_application::{EmitError, EmittedArtifacts, GraphEmitter, OutputTarget};
use votegraph_domain::AgreementGraph;

/// Writes `<base>-<tag>-graph.<ext>` and `<base>-<tag>-participation.<ext>`.
#[derive(Debug, Clone, Default)]
pub struct FileGraphEmitter;

impl FileGraphEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Paths the artifacts of `graph` would be written to.
    pub fn artifact_paths(graph: &AgreementGraph, target: &OutputTarget) -> EmittedArtifacts {
        let stem = format!("{}-{}", target.base_name, graph.orientation.tag());
        let ext = target.format.extension();
        EmittedArtifacts {
            graph: target.directory.join(format!("{}-graph.{}", stem, ext)),
            participation: target
                .directory
                .join(format!("{}-participation.{}", stem, ext)),
        }
    }
}

impl GraphEmitter for FileGraphEmitter {
    fn emit(
        &self,
        graph: &AgreementGraph,
        target: &OutputTarget,
    ) -> Result<EmittedArtifacts, EmitError> {
        let renderer = renderer_for(target.format);
        let graph_body = renderer.graph(graph)?;
        let participation_body = renderer.participation(graph)?;

        let paths = Self::artifact_paths(graph, target);

        if !target.directory.as_os_str().is_empty() {
            fs::create_dir_all(&target.directory).map_err(|e| EmitError::Write {
                path: target.directory.clone(),
                reason: e.to_string(),
            })?;
        }

        let mut batch = WriteBatch::default();
        let result = batch
            .stage(&paths.graph, &graph_body)
            .and_then(|_| batch.stage(&paths.participation, &participation_body))
            .and_then(|_| batch.commit());

        if let Err(e) = result {
            batch.rollback();
            return Err(e);
        }
        batch.discard_backups();

        debug!(
            "Emitted {} ({} bytes) and {} ({} bytes)",
            paths.graph.display(),
            graph_body.len(),
            paths.participation.display(),
            participation_body.len()
        );
        Ok(paths)
    }
}

/// Temp files staged so far, final paths already committed, and the
/// previous artifacts moved aside by the commit.
#[derive(Default)]
struct WriteBatch {
    staged: Vec<(PathBuf, PathBuf)>,
    committed: Vec<PathBuf>,
    backups: Vec<(PathBuf, PathBuf)>,
}

impl WriteBatch {
    fn stage(&mut self, path: &Path, contents: &str) -> Result<(), EmitError> {
        let tmp = temp_sibling(path);
        fs::write(&tmp, contents).map_err(|e| EmitError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.staged.push((tmp, path.to_path_buf()));
        Ok(())
    }

    fn commit(&mut self) -> Result<(), EmitError> {
        while let Some((tmp, path)) = self.staged.first().cloned() {
            if path.is_file() {
                let backup = backup_sibling(&path);
                fs::rename(&path, &backup).map_err(|e| EmitError::Write {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                self.backups.push((backup, path.clone()));
            }
            fs::rename(&tmp, &path).map_err(|e| EmitError::Write {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            self.staged.remove(0);
            self.committed.push(path);
        }
        Ok(())
    }

    /// Remove everything this batch wrote and put the previous artifacts back.
    fn rollback(self) {
        for path in self
            .staged
            .into_iter()
            .map(|(tmp, _)| tmp)
            .chain(self.committed)
        {
            if path.exists()
                && let Err(e) = fs::remove_file(&path)
            {
                warn!("Could not remove {}: {}", path.display(), e);
            }
        }
        for (backup, path) in self.backups {
            if let Err(e) = fs::rename(&backup, &path) {
                warn!(
                    "Could not restore {} from {}: {}",
                    path.display(),
                    backup.display(),
                    e
                );
            }
        }
    }

    fn discard_backups(self) {
        for (backup, _) in self.backups {
            if let Err(e) = fs::remove_file(&backup) {
                warn!("Could not remove {}: {}", backup.display(), e);
            }
        }
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

fn backup_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.bak", name))
}
