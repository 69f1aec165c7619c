use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(unused)]
pub const MANIFEST: &str = "module example.com/app

go 1.21

require (
\tfoo/bar v1.0.0
\tbaz/qux v0.3.1
)

replace foo/bar => ./old
";

/// Helper to create a project directory holding `go.mod` and `replace.yaml`
pub fn create_project(manifest: &str, config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), manifest).unwrap();
    fs::write(temp.path().join("replace.yaml"), config).unwrap();
    temp
}

/// Creates a local checkout directory and returns its absolute path
#[allow(unused)]
pub fn create_local_module(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[allow(unused)]
pub fn read_manifest(root: &Path) -> String {
    fs::read_to_string(root.join("go.mod")).unwrap()
}

/// Helper to run the binary against `go.mod` / `replace.yaml` in `root`
pub fn run_replace(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("modreplace");
    cmd.arg("-gomod")
        .arg("go.mod")
        .arg("-config")
        .arg("replace.yaml")
        .args(extra_args)
        .env_remove("RUST_LOG")
        .current_dir(root);

    cmd.assert()
}
