use crate::build;

/// Returns the long version string with build information
pub fn long_version() -> String {
    let version = build::PKG_VERSION;
    let git_sha = build::SHORT_COMMIT;
    #[allow(clippy::const_is_empty)]
    let git_branch = if build::BRANCH.is_empty() {
        option_env!("GITHUB_REF_NAME").unwrap_or("unknown")
    } else {
        build::BRANCH
    };
    let git_state = if build::GIT_CLEAN { "clean" } else { "dirty" };
    let subject = option_env!("SEARCHBOX_COMMIT_SUBJECT").unwrap_or("no commit message");

    format!(
        "{version} ({git_branch}@{git_sha}, {git_state}: {subject})
Built {} for {} with {}",
        build::BUILD_TIME,
        build::BUILD_TARGET,
        build::RUST_VERSION
    )
}
