use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;

const PACKAGE_JSON: &str = "package.json";

/// The extension build (package.json) owns the release version; the CLI reports the same one.
fn extension_version(path: &Path) -> Result<String, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let json: Value =
        serde_json::from_str(&content).map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
    json.get("version")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| format!("no version field in {}", path.display()))
}

fn main() {
    println!("cargo:rerun-if-changed={}", PACKAGE_JSON);

    let cargo_version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let path = Path::new(PACKAGE_JSON);

    let version = if path.exists() {
        match extension_version(path) {
            Ok(version) => version,
            Err(e) => {
                println!("cargo:warning={}, using Cargo.toml version", e);
                cargo_version
            }
        }
    } else {
        cargo_version
    };

    println!("cargo:rustc-env=KONNYAKU_VERSION={}", version);
}
