use std::time::Duration;

use crate::cli::{Cli, Commands, SinkKind};
use crate::domain::config::Config;
use crate::domain::models::PullReport;
use crate::services::allocation::annotate_allocation_codes;
use crate::services::enrich::enrich_with_carrier;
use crate::services::http::BackoffClient;
use crate::services::jobs::fetch_shipment_jobs;
use crate::services::output::print_one;
use crate::services::secrets::resolve_api_key;
use crate::services::sink::{FileSink, S3Sink, Sink};
use crate::services::storage::audit;

pub fn handle_pull(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    let Commands::Pull {
        sink,
        out_dir,
        bucket,
        skip_allocation,
        collect_orgs,
        api_key,
    } = &cli.command
    else {
        return Ok(false);
    };

    let api_key = resolve_api_key(api_key.as_deref(), &config.auth)?;
    let http = BackoffClient::new(&config.retry, Duration::from_secs(config.api.timeout_secs))?;

    let mut jobs = fetch_shipment_jobs(&http, &config.api, &api_key);
    if jobs.is_empty() {
        anyhow::bail!("no shipment jobs fetched; skipping enrichment and write");
    }

    let (summary, orgs) = enrich_with_carrier(
        &http,
        &config.api,
        &api_key,
        &mut jobs,
        &config.disclosure,
        *collect_orgs,
    );

    if !*skip_allocation {
        annotate_allocation_codes(&mut jobs);
    }

    let sink = build_sink(*sink, out_dir.as_deref(), bucket.as_deref(), config)?;
    let mut artifacts = vec![sink.store(&jobs, "shipment_jobs")?];
    if *collect_orgs {
        artifacts.push(sink.store(&orgs, "organization_data")?);
    }

    let report = PullReport {
        jobs_fetched: jobs.len(),
        resolved: summary.resolved,
        enrich_failed: summary.failed,
        missing_qid: summary.missing_qid,
        allocation_applied: !*skip_allocation,
        artifacts,
    };
    audit("pull", serde_json::to_value(&report)?);
    print_one(cli.json, report, |r| {
        format!(
            "pulled {} jobs ({} carriers resolved, {} failed, {} missing QID); wrote {}",
            r.jobs_fetched,
            r.resolved,
            r.enrich_failed,
            r.missing_qid,
            r.artifacts.join(", ")
        )
    })?;
    Ok(true)
}

fn build_sink(
    kind: SinkKind,
    out_dir: Option<&str>,
    bucket: Option<&str>,
    config: &Config,
) -> anyhow::Result<Sink> {
    match kind {
        SinkKind::File => Ok(Sink::File(FileSink::new(
            out_dir.unwrap_or(&config.sink.out_dir),
        ))),
        SinkKind::S3 => Ok(Sink::S3(S3Sink::new(
            bucket.unwrap_or(&config.sink.bucket),
            &config.auth.region,
        )?)),
    }
}
