pub const DEFAULT_SERVER_BACKEND_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "8096";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PROVIDER_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the provider API key. Required at startup.
pub const ENV_PROVIDER_API_KEY: &str = "GENAI_API_KEY";
