//! Command line argument definitions

use clap::{Parser, ValueEnum};

use crate::schema::model::OperationKind;

/// Generate documentation for a live GraphQL endpoint
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gqldocs",
    version,
    about = "GraphQL endpoint documentation generator",
    long_about = "Introspects a live GraphQL endpoint and synthesizes human-friendly \
documentation: sample queries and mutations, example variables, sample responses \
and ready-to-run client snippets."
)]
pub struct Args {
    /// GraphQL endpoint URL (a bare host defaults to the /graphql path)
    pub endpoint: String,

    /// Document a single operation by name
    #[arg(short, long)]
    pub operation: Option<String>,

    /// Disambiguate when a name exists as both a query and a mutation
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Render one schema slice: mutations, types, input-types or enum-types
    #[arg(long)]
    pub tab: Option<String>,

    /// Emit machine-readable JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30.0)]
    pub timeout: f64,

    /// Verify TLS certificates instead of the default tolerant mode
    #[arg(long)]
    pub strict_certs: bool,

    /// Probe the endpoint with a minimal query before introspecting
    #[arg(long, value_enum, default_value_t = VerifyArg::No)]
    pub verify: VerifyArg,

    /// Selection-set expansion depth for generated samples
    #[arg(long, default_value_t = 5)]
    pub depth: usize,

    /// Increase log verbosity (-v for debug, -vv for trace of dependencies)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Whether the introspection client should tolerate self-signed or
    /// otherwise invalid certificates. Tolerant by default; `--strict-certs`
    /// opts into verification.
    pub fn accept_invalid_certs(&self) -> bool {
        !self.strict_certs
    }
}

/// `--kind` values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Query,
    Mutation,
}

impl From<KindArg> for OperationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Query => OperationKind::Query,
            KindArg::Mutation => OperationKind::Mutation,
        }
    }
}

/// `--verify` values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyArg {
    Yes,
    No,
}
