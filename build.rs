use std::env;
use std::fs;
use std::path::Path;

/// Variables read by `AppConfig::from_env` through `option_env!`
const CONFIG_KEYS: [&str; 8] = [
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "RETRY_ATTEMPTS",
    "QUERY_STALE_MINUTES",
    "MAX_UPLOAD_MB",
    "TOAST_CAPACITY",
    "TOAST_TTL_MS",
];

fn main() {
    // Forward variables from .env into compile-time env (read by option_env!)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using defaults (BACKEND_URL=http://localhost:8080).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
