//! # Terraform Output Module
//!
//! Renders the derived peering structures as Terraform configuration for the
//! `consul` provider and writes them to disk.
//!
//! ## Output Files
//!
//! ```text
//! providers.tf   # one `provider "consul"` block per distinct address
//! acceptors.tf   # one `consul_peering_token` per acceptor relationship
//! dialers.tf     # one `consul_peering` per dialer relationship
//! ```
//!
//! Every document starts with [`HEADER`], followed by one block per record in
//! the order the records were derived. Values are inserted verbatim.
//!
//! ## Key Components
//!
//! - `blocks.rs`: the [`TerraformBlock`] trait and its implementations
//! - `output.rs`: output file locations and document writing

pub mod blocks;
pub mod output;

pub use blocks::{render_document, TerraformBlock, HEADER};
pub use output::{write_document, OutputKind, OutputPaths};

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while rendering or writing a document
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render {kind} document")]
    Template {
        kind: OutputKind,
        #[source]
        source: fmt::Error,
    },

    #[error("Failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
