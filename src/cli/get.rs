use clap::{Args, Subcommand, ValueEnum};

#[derive(Args, Debug)]
pub struct GetTarget {
    #[command(subcommand)]
    pub resource: GetResource,
}

#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Display the curated packages installed in the cluster
    #[command(alias = "package")]
    Packages(GetPackagesArgs),
}

/// Output formats accepted by `get packages`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Arguments for `get packages`
#[derive(Args, Debug)]
pub struct GetPackagesArgs {
    /// Output format
    #[arg(long, short = 'o', value_enum)]
    pub output: Option<OutputFormat>,

    /// Installed package names (all when omitted)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}
