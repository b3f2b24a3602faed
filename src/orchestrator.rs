//! Generation orchestrator.
//!
//! Runs the pipeline from the loaded cluster list to the three Terraform
//! documents. Documents are written one at a time in [`OutputKind::ALL`]
//! order; the first failure stops the run and earlier files stay on disk.

use crate::config::Config;
use crate::config_loader::load_config;
use crate::peering::{derive_providers, enumerate_acceptors, enumerate_dialers};
use crate::terraform::{render_document, write_document, OutputKind, OutputPaths, RenderError, TerraformBlock};
use log::info;
use std::path::{Path, PathBuf};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub providers: usize,
    pub acceptors: usize,
    pub dialers: usize,
    pub files: Vec<PathBuf>,
}

/// Load `config_path`, validate it and generate all documents
pub fn run(config_path: &Path, paths: &OutputPaths) -> color_eyre::eyre::Result<GenerationSummary> {
    let config = load_config(config_path)?;
    config.validate()?;
    Ok(generate(&config, paths)?)
}

/// Derive providers and relationships from `config` and write all documents
pub fn generate(config: &Config, paths: &OutputPaths) -> Result<GenerationSummary, RenderError> {
    let providers = derive_providers(&config.clusters);
    let acceptors = enumerate_acceptors(&config.clusters);
    let dialers = enumerate_dialers(&config.clusters);

    info!(
        "Derived {} provider(s), {} acceptor(s) and {} dialer(s) from {} cluster(s)",
        providers.len(),
        acceptors.len(),
        dialers.len(),
        config.len()
    );

    let mut files = Vec::with_capacity(OutputKind::ALL.len());
    for kind in OutputKind::ALL {
        let path = paths.path(kind);
        match kind {
            OutputKind::Providers => emit(kind, &providers, path)?,
            OutputKind::Acceptors => emit(kind, &acceptors, path)?,
            OutputKind::Dialers => emit(kind, &dialers, path)?,
        }
        files.push(path.to_path_buf());
    }

    Ok(GenerationSummary {
        providers: providers.len(),
        acceptors: acceptors.len(),
        dialers: dialers.len(),
        files,
    })
}

fn emit<B: TerraformBlock>(kind: OutputKind, blocks: &[B], path: &Path) -> Result<(), RenderError> {
    let document = render_document(blocks).map_err(|source| RenderError::Template { kind, source })?;
    write_document(path, &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClusterDescriptor;

    #[test]
    fn test_generate_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::in_dir(dir.path());
        let config = Config::new(vec![
            ClusterDescriptor::new("a", "10.0.0.1"),
            ClusterDescriptor::new("b", "10-0-0-1"),
            ClusterDescriptor::new("c", "10.0.0.3").with_partition("p"),
        ]);

        let summary = generate(&config, &paths).unwrap();
        assert_eq!(summary.providers, 2);
        assert_eq!(summary.acceptors, 3);
        assert_eq!(summary.dialers, 3);
        assert_eq!(summary.files, vec![
            paths.providers.clone(),
            paths.acceptors.clone(),
            paths.dialers.clone(),
        ]);

        for file in &summary.files {
            assert!(file.exists(), "{} was not written", file.display());
        }
    }

    #[test]
    fn test_failure_keeps_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = OutputPaths::in_dir(dir.path());
        paths.dialers = dir.path().join("missing").join("dialers.tf");

        let config = Config::new(vec![
            ClusterDescriptor::new("a", "x"),
            ClusterDescriptor::new("b", "y"),
        ]);

        let err = generate(&config, &paths).unwrap_err();
        assert!(matches!(err, RenderError::Write { .. }));
        assert!(paths.providers.exists());
        assert!(paths.acceptors.exists());
        assert!(!paths.dialers.exists());
    }
}
