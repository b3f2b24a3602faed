//! # consul-peering-setup - Terraform generator for Consul cluster peering
//!
//! Reads a JSON list of Consul clusters and writes the Terraform needed to
//! peer them with each other through the `consul` provider.
//!
//! ## Architecture
//!
//! - `config`: cluster descriptors and validation
//! - `config_loader`: reading and parsing the JSON config file
//! - `peering`: provider deduplication and acceptor/dialer enumeration
//! - `terraform`: block rendering and document output
//! - `utils`: configuration consistency checks
//! - `orchestrator`: the end-to-end generation pipeline
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use consul_peering_setup::{orchestrator, terraform::OutputPaths};
//! use std::path::Path;
//!
//! let summary = orchestrator::run(Path::new("clusters.json"), &OutputPaths::in_dir("."))?;
//! println!("{} peerings generated", summary.acceptors);
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```json
//! [
//!   {"peer_name": "dc1", "address": "consul-dc1.internal:8500"},
//!   {"peer_name": "dc2", "address": "consul-dc2.internal:8500", "partition": "team-a"}
//! ]
//! ```
//!
//! The first cluster of each pair creates the peering token (acceptor) and the
//! second one consumes it (dialer).
//!
//! ## Error Handling
//!
//! Each stage returns its own error type (`ConfigError`, `RenderError`); the
//! binary reports them through `color_eyre` and exits non-zero on the first
//! failure.

pub mod config;
pub mod config_loader;
pub mod peering;
pub mod terraform;
pub mod utils;
pub mod orchestrator;
