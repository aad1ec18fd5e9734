use std::sync::OnceLock;

/// Build-time git commit SHA stamped by build.rs when available.
pub fn git_sha() -> Option<&'static str> {
    option_env!("DOCKET_BUILD_GIT_SHA")
}

/// Package version, suffixed with the short commit SHA when known.
pub fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match git_sha() {
        Some(sha) => format!("{} ({})", env!("CARGO_PKG_VERSION"), &sha[..sha.len().min(7)]),
        None => env!("CARGO_PKG_VERSION").to_string(),
    })
}
