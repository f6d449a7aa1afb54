#![forbid(unsafe_code)]

fn main() {
    // Build info is best effort: builds outside a git checkout still
    // succeed, with "unknown" substituted for the missing values.
    emit("GIT_BRANCH", build_data::get_git_branch().ok());
    emit("GIT_COMMIT_SHORT", build_data::get_git_commit_short().ok());
    emit(
        "GIT_DIRTY",
        build_data::get_git_dirty().ok().map(|d| d.to_string()),
    );
    emit("RUSTC_VERSION", build_data::get_rustc_version().ok());
}

fn emit(key: &str, value: Option<String>) {
    println!(
        "cargo:rustc-env={}={}",
        key,
        value.unwrap_or_else(|| "unknown".to_string())
    );
}
