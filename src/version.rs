//! Various helper method for reporting on the compiled version of the library both from calling
//! applications as well as the version reported in the user agent of the library HTTP client.

/// Reports the full version and various useful build settings as a well-formatted and
/// semi-structured string.
pub fn full_version() -> String {
    format!(
        "version={} build-profile={} build-timestamp={} features={} repo-version={}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_FEATURES"),
        env!("REPO_VERSION"),
    )
}

/// Only the core version information, small enough to send along with every request.
pub fn minimal_version() -> String {
    format!(
        "{} (repo-version={})",
        env!("CARGO_PKG_VERSION"),
        env!("REPO_VERSION")
    )
}

/// The user agent used by the built-in HTTP client. Useful for operators looking for this
/// client's traffic in their GitLab logs.
pub fn user_agent() -> String {
    format!("snipmove/{}", minimal_version())
}
