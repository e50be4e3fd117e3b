// Shared build script helper for README-to-rustdoc processing.
// Pull it into a build.rs with: include!("../build_common.rs");
//
// The including file must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Prepare a crate's README.md for use as rustdoc front matter.
///
/// Rewrites links so they resolve inside rustdoc output: `src/foo.rs` style
/// links become module links, and relative links to the workspace README are
/// pointed at the repository URL from the workspace manifest. The result is
/// written to `$OUT_DIR/README_GENERATED.md`.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme_path = Path::new(crate_dir).join("README.md");
    let Ok(content) = fs::read_to_string(&readme_path) else {
        return; // No README, nothing to process
    };

    let mut rustdoc = content.replace("](src/", "](").replace(".rs)", ")");

    if let Some(url) = workspace_repo_url(crate_dir) {
        rustdoc = rustdoc.replace("](../../README.md", &format!("]({url}"));
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rustdoc)
        .expect("failed to write README_GENERATED.md");
}

/// Read the `repository` field from the workspace manifest, if present.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir)
        .parent()? // crates/
        .parent()? // workspace root
        .join("Cargo.toml");

    let content = fs::read_to_string(manifest).ok()?;
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("repository")
            && line.contains('=')
            && let Some(start) = line.find('"')
            && let Some(end) = line.rfind('"')
            && start < end
        {
            return Some(line[start + 1..end].to_string());
        }
    }
    None
}
