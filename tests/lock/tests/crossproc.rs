//! Cross-process determinism test.
//!
//! Spawns the `solve_fixture` binary under several environment variants and
//! asserts that all produce identical output, and that the output matches
//! the same fixtures run in this process. This proves that search results
//! are not influenced by process-level state (cwd, locale, env vars, hash
//! seeds).

use std::path::Path;
use std::process::Command;

use lock_tests::fixtures::fixture_lines;

/// Resolve the path to the compiled binary.
///
/// `cargo test` puts test binaries in `target/debug/deps/`. The
/// `solve_fixture` binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

/// Run the binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(
        baseline.contains("hanoi_3x3.solution_digest=sha256:"),
        "baseline output missing hanoi solution digest"
    );
    assert!(
        baseline.contains("puzzle_seed7.summary_digest=sha256:"),
        "baseline output missing puzzle summary digest"
    );

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[
            ("PATHWISE_NOISE", "1"),
            ("RUST_LOG", "trace"),
            ("RUST_BACKTRACE", "1"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with unrelated env vars");
}

#[test]
fn crossproc_matches_inproc() {
    let child = run_variant(&workspace_root(), &[]);
    let child_lines: Vec<&str> = child.lines().collect();
    let inproc = fixture_lines();
    assert_eq!(child_lines, inproc);
}
