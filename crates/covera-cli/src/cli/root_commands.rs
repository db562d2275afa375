use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List embedded knowledge objects.
    List,
    /// Freshness and confidence of a knowledge object.
    Status(TargetArgs),
    /// Coverage roll-up of a knowledge object.
    Summary(TargetArgs),
    /// Framework table of a knowledge object.
    Frameworks(FrameworksArgs),
    /// Run integrity checks over the embedded knowledge data.
    Validate(ValidateArgs),
    /// Print a JSON Schema, or list the available ones.
    Schema(SchemaArgs),
}

/// Knowledge object selector. Defaults to `general.default_knowledge`.
#[derive(Clone, Debug, Args)]
pub struct TargetArgs {
    pub id: Option<String>,
}

/// Arguments for `covera frameworks`.
#[derive(Clone, Debug, Args)]
pub struct FrameworksArgs {
    pub id: Option<String>,
    /// Only frameworks with this status (active, applicable, no-guidance).
    #[arg(short, long)]
    pub status: Option<String>,
}

/// Arguments for `covera validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Validate a single knowledge object instead of all of them.
    pub id: Option<String>,
    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `covera schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub name: Option<String>,
}
