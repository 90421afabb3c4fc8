/// Default values for configuration fields

pub fn host() -> String {
    "127.0.0.1".to_string()
}

pub fn port() -> u16 {
    8888
}

pub fn timeout_secs() -> u64 {
    30
}

pub fn max_concurrent_requests() -> usize {
    256
}

pub fn enable_compression() -> bool {
    true
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn directories() -> Vec<String> {
    vec!["../subtitles".to_string()]
}

pub fn formats() -> Vec<String> {
    vec![".ass".to_string(), ".srt".to_string(), ".vtt".to_string()]
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# SubtitlePlus Server Configuration
# ===============================================================================

[server]
host = "127.0.0.1"                   # Bind address (127.0.0.1 = local only)
port = 8888                          # Server port
timeout_secs = 30                    # Request timeout in seconds
max_concurrent_requests = 256        # Max simultaneous requests
enable_compression = true            # HTTP compression (gzip/brotli/deflate)

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["chrome-extension://<id>"] to restrict

[subtitles]
# Search directories, highest priority first. "~" and $VARS are expanded,
# relative paths resolve against the working directory. Missing directories
# are created on startup.
directories = ["../subtitles"]

# Accepted suffixes, preferred first. When several files match a video ID the
# earliest format wins, even over a file in a higher-priority directory.
formats = [".ass", ".srt", ".vtt"]
"#;
