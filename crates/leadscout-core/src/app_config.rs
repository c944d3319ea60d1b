use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Key for the judge provider. Required: the run aborts without it.
    pub judge_api_key: String,
    /// Key for the search provider. A missing key yields an empty lead set.
    pub search_api_key: Option<String>,
    pub search_url: String,
    pub judge_base_url: String,
    pub judge_model: String,
    /// Upper bound on search results requested per run.
    pub result_count: u32,
    /// Minimum spacing between consecutive judge calls.
    pub judge_delay_ms: u64,
    /// Maximum number of judge calls in flight at once.
    pub judge_concurrency: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub profile_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("judge_api_key", &"[redacted]")
            .field(
                "search_api_key",
                &self.search_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_url", &self.search_url)
            .field("judge_base_url", &self.judge_base_url)
            .field("judge_model", &self.judge_model)
            .field("result_count", &self.result_count)
            .field("judge_delay_ms", &self.judge_delay_ms)
            .field("judge_concurrency", &self.judge_concurrency)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("profile_path", &self.profile_path)
            .field("output_path", &self.output_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}
