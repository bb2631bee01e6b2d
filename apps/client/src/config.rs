/// Client configuration loaded from environment variables. Both values have
/// working defaults, so a bare `resume-client` run targets a local server.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            api_url: std::env::var("RESUME_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
