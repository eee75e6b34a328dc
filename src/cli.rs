use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "haulsync",
    version,
    about = "Shipment-job enrichment pipeline for the Loop TMS API"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, enrich, and persist one snapshot of shipment jobs
    Pull {
        #[arg(long, value_enum, default_value_t = SinkKind::File)]
        sink: SinkKind,
        #[arg(long, help = "Directory for file-sink artifacts (default: sink.out_dir)")]
        out_dir: Option<String>,
        #[arg(long, help = "Bucket for s3-sink artifacts (default: sink.bucket)")]
        bucket: Option<String>,
        #[arg(long, default_value_t = false, help = "Skip the cost-allocation coding stage")]
        skip_allocation: bool,
        #[arg(
            long,
            default_value_t = false,
            help = "Also persist the collected organization payloads as a second artifact"
        )]
        collect_orgs: bool,
        #[arg(long, help = "Bearer token (overrides config and Secrets Manager)")]
        api_key: Option<String>,
    },
    /// Resolve cost-allocation codes without touching the network
    Codes {
        #[arg(long)]
        freight_terms: Option<String>,
        #[arg(long)]
        job_type: Option<String>,
    },
    /// Preflight: config, credentials, and sink reachability
    Check,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    File,
    S3,
}
