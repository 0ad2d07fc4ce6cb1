/// Default values for configuration fields

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    60
}

pub fn max_body_size() -> usize {
    100
}

pub fn max_concurrent_requests() -> usize {
    1000
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn streaming_threshold_mb() -> u64 {
    100  // Uploaded files larger than 100MB are streamed back instead of read into memory
}

pub fn enable_compression() -> bool {
    true
}

// Upload defaults
pub fn public_dir() -> String {
    "public".to_string()
}

pub fn default_directory() -> String {
    "articles".to_string()
}

pub fn max_attempts() -> u32 {
    3
}

pub fn initial_delay_ms() -> u64 {
    1000
}

pub fn max_delay_ms() -> u64 {
    5000
}

pub fn retry_settings() -> super::models::RetrySettings {
    super::models::RetrySettings {
        max_attempts: max_attempts(),
        initial_delay_ms: initial_delay_ms(),
        max_delay_ms: max_delay_ms(),
    }
}

pub fn upload_settings() -> super::models::UploadSettings {
    super::models::UploadSettings {
        public_dir: public_dir(),
        default_directory: default_directory(),
        retry: retry_settings(),
    }
}

// Site defaults
pub fn documents_path() -> String {
    "data/sites.json".to_string()
}

pub fn site_settings() -> super::models::SiteSettings {
    super::models::SiteSettings {
        documents_path: documents_path(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# Blog Server Configuration
# ===============================================================================

[server]
# Network
host = "0.0.0.0"                     # Server bind address (0.0.0.0 = all interfaces)
port = 3000                          # Server port
base_url = "http://localhost:3000"   # Public site URL (used in JSON-LD and links)

# Performance
tcp_nodelay = true                   # Disable Nagle's algorithm (lower latency)
timeout_secs = 60                    # Request timeout in seconds
max_concurrent_requests = 1000       # Max simultaneous connections
max_body_size_mb = 100               # Max request body size in MB (upload limit)
streaming_threshold_mb = 100         # Uploaded files >100MB are streamed when served
enable_compression = true            # HTTP compression (gzip/brotli/deflate)

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["https://example.com"] for production

# ===============================================================================
# UPLOADS
# ===============================================================================
# Object storage credentials are read from the environment:
#   OSS_REGION, OSS_ACCESS_KEY_ID, OSS_ACCESS_KEY_SECRET, OSS_BUCKET, OSS_BASE_PATH
#   (or the PUBLIC_OSS_* variants). Without all four, files are stored locally.
[uploads]
public_dir = "public"                # Local files go to {public_dir}/uploads, served at /uploads
default_directory = "articles"       # Directory used when the form omits one

[uploads.retry]
max_attempts = 3                     # Object storage write attempts
initial_delay_ms = 1000              # Delay before the second attempt
max_delay_ms = 5000                  # Upper bound for the doubling delay

# ===============================================================================
# SITE
# ===============================================================================
[site]
documents_path = "data/sites.json"   # "sites" collection (JSON array, first document wins)
"#;
