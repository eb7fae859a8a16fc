// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use crate::access::AccessChecker;
use crate::config::{ConfigError, ResolverConfig};
use crate::error::ResolveError;
use crate::graph::{Graph, GraphError};
use crate::identity::User;
use crate::navigation::NavigationFilter;
use crate::node::NodeId;
use crate::resolver::PermissionResolver;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Resolve effective permissions in a content graph
#[derive(Parser, Debug)]
#[command(name = "permtree", version, about = "Resolve effective permissions in a content graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the merged permission map of a node as JSON
    Resolve {
        /// Node id
        node: String,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Check a single resource; exits 0 when allowed and 1 when denied
    Check {
        /// Node id
        node: String,

        /// Resource name
        resource: String,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// List the children of a navigation parent the user may see
    Nav {
        /// Parent node id
        parent: String,

        /// Node property holding the required resource
        #[arg(long, default_value = crate::navigation::PERMISSION_RESOURCE_PROPERTY)]
        property: String,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Arguments shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Graph file (TOML, or JSON by extension)
    #[arg(long, short = 'g', env = "PERMTREE_GRAPH")]
    pub graph: PathBuf,

    /// Resolver configuration file (TOML)
    #[arg(long, env = "PERMTREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// User id the question is asked for
    #[arg(long, short = 'u')]
    pub user: Option<String>,
}

/// Errors surfaced by the command-line tool
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Allowed,
    Denied,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Done | Self::Allowed => 0,
            Self::Denied => 1,
        }
    }
}

/// Exit code used for any error.
pub const ERROR_EXIT_CODE: i32 = 2;

impl CommonArgs {
    fn checker(&self) -> Result<AccessChecker<Graph>, CliError> {
        let graph = Graph::load(&self.graph)?;
        let config = match &self.config {
            Some(path) => ResolverConfig::load(path)?,
            None => ResolverConfig::default(),
        };
        Ok(AccessChecker::new(PermissionResolver::with_config(graph, config)))
    }

    fn user(&self) -> Option<User> {
        self.user.as_deref().map(User::new)
    }
}

/// Execute a parsed command, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Outcome, CliError> {
    match &cli.command {
        Command::Resolve { node, common } => {
            let checker = common.checker()?;
            let graph = checker.resolver().classifier();
            let node = graph.node(&NodeId::from(node.as_str()))?;
            let permissions = checker.resolver().resolve_node(&node, common.user().as_ref())?;
            serde_json::to_writer_pretty(&mut *out, &*permissions)?;
            writeln!(out)?;
            Ok(Outcome::Done)
        }
        Command::Check {
            node,
            resource,
            common,
        } => {
            let checker = common.checker()?;
            let node = checker
                .resolver()
                .classifier()
                .node(&NodeId::from(node.as_str()))?;
            if checker.is_allowed(&node, resource, common.user().as_ref())? {
                writeln!(out, "allowed")?;
                Ok(Outcome::Allowed)
            } else {
                writeln!(out, "denied")?;
                Ok(Outcome::Denied)
            }
        }
        Command::Nav {
            parent,
            property,
            common,
        } => {
            let checker = common.checker()?;
            let graph = checker.resolver().classifier();
            let parent = graph.node(&NodeId::from(parent.as_str()))?;
            let children = graph.children(&parent)?;
            let visible = NavigationFilter::new(&checker)
                .with_property(property.as_str())
                .filter_children(children, common.user().as_ref())?;
            for child in visible {
                writeln!(out, "{}", child.id)?;
            }
            Ok(Outcome::Done)
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
