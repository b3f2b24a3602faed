//! Terraform block rendering.

use crate::peering::{PeeringRelationship, PeeringRole, ProviderBinding};
use std::fmt::{self, Write};

/// First line of every generated document
pub const HEADER: &str = "# Generated from consul-peering-setup";

/// A record that renders as a single Terraform block
pub trait TerraformBlock {
    fn write_block(&self, out: &mut dyn Write) -> fmt::Result;
}

impl TerraformBlock for ProviderBinding {
    fn write_block(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "provider \"consul\" {{")?;
        writeln!(out, "  address = \"{}\"", self.address)?;
        writeln!(out, "  alias = \"{}\"", self.alias)?;
        writeln!(out, "}}")
    }
}

impl TerraformBlock for PeeringRelationship {
    fn write_block(&self, out: &mut dyn Write) -> fmt::Result {
        let resource_type = match self.role {
            PeeringRole::Acceptor => "consul_peering_token",
            PeeringRole::Dialer => "consul_peering",
        };

        writeln!(out, "resource \"{}\" \"{}\" {{", resource_type, self.resource_name())?;
        writeln!(out, "  provider  = consul.{}", self.provider)?;
        writeln!(out, "  peer_name = \"{}\"", self.target)?;
        if self.role == PeeringRole::Dialer {
            writeln!(
                out,
                "  peering_token = consul_peering_token.{}.peering_token",
                self.reverse_resource_name()
            )?;
        }
        if let Some(partition) = &self.partition {
            writeln!(out, "  partition = \"{}\"", partition)?;
        }
        writeln!(out, "}}")
    }
}

/// Render a full document: the header, then a blank line before each block.
pub fn render_document<B: TerraformBlock>(blocks: &[B]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", HEADER)?;
    for block in blocks {
        writeln!(out)?;
        block.write_block(&mut out)?;
    }
    Ok(out)
}
