use crate::cli::{Cli, Commands};
use crate::domain::config::Config;
use crate::domain::models::{CheckItem, CodesReport};
use crate::services::allocation::{freight_term_code, job_type_code};
use crate::services::output::{print_one, print_out};
use crate::services::storage::config_path;

pub fn handle_codes(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Codes {
        freight_terms,
        job_type,
    } = &cli.command
    else {
        return Ok(false);
    };

    let report = CodesReport {
        freight_charge_terms: freight_term_code(freight_terms.as_deref()),
        job_type: job_type_code(job_type.as_deref()),
    };
    print_one(cli.json, report, |r| {
        format!(
            "Freight Charge Terms={}\tJob Type={}",
            r.freight_charge_terms, r.job_type
        )
    })?;
    Ok(true)
}

pub fn handle_check(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    let Commands::Check = &cli.command else {
        return Ok(false);
    };

    let mut items = Vec::new();

    let path = config_path()?;
    items.push(CheckItem {
        name: "config".to_string(),
        status: if path.exists() {
            path.display().to_string()
        } else {
            "defaults (no config.toml)".to_string()
        },
    });

    let key_source = if config.auth.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
        "config".to_string()
    } else {
        format!("secrets-manager:{}", config.auth.secret_name)
    };
    items.push(CheckItem {
        name: "api_key".to_string(),
        status: key_source,
    });

    items.push(CheckItem {
        name: "date_window".to_string(),
        status: format!("{}..{}", config.api.revised_after, config.api.revised_before),
    });

    let out_dir = std::path::Path::new(&config.sink.out_dir);
    items.push(CheckItem {
        name: "out_dir".to_string(),
        status: if std::fs::create_dir_all(out_dir).is_ok() {
            "writable".to_string()
        } else {
            "unwritable".to_string()
        },
    });

    items.push(CheckItem {
        name: "s3_bucket".to_string(),
        status: config.sink.bucket.clone(),
    });

    print_out(cli.json, &items, |item| {
        format!("{}\t{}", item.name, item.status)
    })?;
    Ok(true)
}
