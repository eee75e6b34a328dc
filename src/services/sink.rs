use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Artifact destination, constructed explicitly per run. The variants
/// share naming and serialization so both deployments write identical
/// documents.
pub enum Sink {
    File(FileSink),
    S3(S3Sink),
}

pub struct FileSink {
    out_dir: PathBuf,
}

impl FileSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

pub struct S3Sink {
    bucket: String,
    client: aws_sdk_s3::Client,
    runtime: tokio::runtime::Runtime,
}

impl S3Sink {
    pub fn new(bucket: impl Into<String>, region: &str) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("starting runtime for the S3 client")?;
        let config = runtime.block_on(
            aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(region.to_string()))
                .load(),
        );
        Ok(Self {
            bucket: bucket.into(),
            client: aws_sdk_s3::Client::new(&config),
            runtime,
        })
    }
}

impl Sink {
    /// Serializes `data` and writes it under a timestamped name derived
    /// from `logical_name`. Returns the written location. Write failures
    /// are fatal for the run.
    pub fn store<T: Serialize>(&self, data: &T, logical_name: &str) -> anyhow::Result<String> {
        let name = artifact_name(logical_name, Utc::now());
        let body = to_indented_json(data)?;
        match self {
            Sink::File(sink) => {
                fs::create_dir_all(&sink.out_dir)
                    .with_context(|| format!("creating {}", sink.out_dir.display()))?;
                let path = sink.out_dir.join(&name);
                fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
                Ok(path.display().to_string())
            }
            Sink::S3(sink) => {
                sink.runtime
                    .block_on(
                        sink.client
                            .put_object()
                            .bucket(&sink.bucket)
                            .key(&name)
                            .body(aws_sdk_s3::primitives::ByteStream::from(body.into_bytes()))
                            .send(),
                    )
                    .with_context(|| format!("uploading {name} to s3://{}", sink.bucket))?;
                Ok(format!("s3://{}/{name}", sink.bucket))
            }
        }
    }
}

// Colon-free UTC timestamp so names sort lexically and stay valid on
// common filesystems.
pub fn artifact_name(logical_name: &str, now: DateTime<Utc>) -> String {
    format!("{logical_name}-{}.json", now.format("%Y-%m-%dT%H-%M-%SZ"))
}

fn to_indented_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)
        .context("serializing artifact")?;
    Ok(String::from_utf8(buf)?)
}
