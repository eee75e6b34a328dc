use serde::Deserialize;

fn default_base_url() -> String {
    "https://api.loop.us/v1".to_string()
}

fn default_revised_after() -> String {
    "2023-09-01T00:00:00.000Z".to_string()
}

fn default_revised_before() -> String {
    "2023-10-01T00:00:00.000Z".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_secret_name() -> String {
    "LoopsAPI".to_string()
}

fn default_secret_field() -> String {
    "password".to_string()
}

fn default_region() -> String {
    "us-west-1".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1_000
}

fn default_bol_allowlist() -> Vec<String> {
    vec!["334154782".to_string()]
}

fn default_out_dir() -> String {
    ".".to_string()
}

fn default_bucket() -> String {
    "loop-tms-ftp".to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub disclosure: DisclosureConfig,
    #[serde(default)]
    pub sink: SinkConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_revised_after")]
    pub revised_after: String,
    #[serde(default = "default_revised_before")]
    pub revised_before: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            revised_after: default_revised_after(),
            revised_before: default_revised_before(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_secret_name")]
    pub secret_name: String,
    #[serde(default = "default_secret_field")]
    pub secret_field: String,
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            secret_name: default_secret_name(),
            secret_field: default_secret_field(),
            region: default_region(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
        }
    }
}

/// Which jobs get the organization's legal name attached. The seed
/// allow-list carries the single BOL number the first deployment keyed
/// on, so default behavior matches the historical output.
#[derive(Debug, Deserialize)]
pub struct DisclosureConfig {
    #[serde(default = "default_bol_allowlist")]
    pub bol_allowlist: Vec<String>,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            bol_allowlist: default_bol_allowlist(),
        }
    }
}

impl DisclosureConfig {
    pub fn discloses(&self, bol_number: Option<&str>) -> bool {
        bol_number
            .map(|bol| self.bol_allowlist.iter().any(|allowed| allowed == bol))
            .unwrap_or(false)
    }
}

#[derive(Debug, Deserialize)]
pub struct SinkConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            bucket: default_bucket(),
        }
    }
}
