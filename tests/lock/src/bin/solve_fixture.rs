//! Binary that solves the fixed lock-test worlds and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: `label.key=value` lines, see `lock_tests::fixtures::report_lines`.

fn main() {
    for line in lock_tests::fixtures::fixture_lines() {
        println!("{line}");
    }
}
