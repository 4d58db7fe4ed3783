pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_GENERATOR_MODEL: &str = "gemini-pro";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
