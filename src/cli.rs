//! CLI argument parsing for the post-processing step.
//!
//! The CLI is intentionally thin: it resolves configuration into a code set
//! and wires the I/O wrappers around the enrichment engine, without embedding
//! any rule policy of its own.
use crate::enrich::PolicyProfile;
use crate::io::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Root CLI entrypoint for the post-processor.
#[derive(Parser, Debug)]
#[command(
    name = "oapp",
    version,
    about = "Add standard response codes and headers to an OpenAPI document",
    after_help = "Examples:\n  oapp --input-dir target --profile minimal\n  oapp --input-dir target --codes 400,404,500 --format json --format yaml\n  oapp --input-name my-api --output-dir docs --output-name my-api-enriched"
)]
pub struct RootArgs {
    /// Directory containing the input specification
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Base name of the input specification, probed with .json/.yaml/.yml
    #[arg(long, value_name = "NAME", default_value = "open-api")]
    pub input_name: String,

    /// Directory for the post-processed specification
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Base name for the post-processed specification
    #[arg(
        long,
        value_name = "NAME",
        default_value = "open-api-post-processed-specification"
    )]
    pub output_name: String,

    /// Output format; repeat the flag to emit several
    #[arg(long, value_enum, value_name = "FORMAT", default_values_t = vec![OutputFormat::Json])]
    pub format: Vec<OutputFormat>,

    /// Named status-code profile; wins over --codes
    #[arg(long, value_enum, value_name = "PROFILE")]
    pub profile: Option<PolicyProfile>,

    /// Explicit status codes to enrich with (comma-separated)
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    pub codes: Vec<String>,
}
