// tests/integration_tests/search_test.rs
use super::common::{create_entry, run_tool, stdout_lines};
use anyhow::Result;
use tempfile::TempDir;

fn target(dir: &TempDir) -> &str {
    dir.path().to_str().expect("temp paths are valid UTF-8")
}

#[test]
fn test_search_matches_prints_only_matching_entries() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "fooBar")?;
    create_entry(dir.path(), "foo_bar")?;
    create_entry(dir.path(), "foo-bar")?;

    let output = run_tool(&["search", "camelcase", target(&dir), "--matches"])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["fooBar"]);
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_search_default_prints_violations() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "fooBar")?;
    create_entry(dir.path(), "foo_bar")?;
    create_entry(dir.path(), "foo-bar")?;

    let output = run_tool(&["search", "camelcase", target(&dir)])?;
    assert!(output.status.success());
    let mut lines = stdout_lines(&output);
    lines.sort();
    assert_eq!(lines, vec!["foo-bar", "foo_bar"]);
    Ok(())
}

#[test]
fn test_search_full_path_prints_absolute_paths() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "fooBar")?;

    let output = run_tool(&["search", "camelcase", target(&dir), "-f", "-m"])?;
    assert!(output.status.success());
    let canonical = std::fs::canonicalize(dir.path())?;
    let expected = canonical.join("fooBar").display().to_string();
    assert_eq!(stdout_lines(&output), vec![expected]);
    Ok(())
}

#[test]
fn test_search_recursive_descends_into_subdirectories() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "fooBar")?;
    create_entry(dir.path(), "b/foo_bar")?;

    let output = run_tool(&["search", "camelcase", target(&dir), "-R", "--matches"])?;
    assert!(output.status.success());
    // The directory b is classified but does not match, and nothing
    // inside it matches either.
    assert_eq!(stdout_lines(&output), vec!["fooBar"]);
    Ok(())
}

#[test]
fn test_search_recursive_prints_nested_relative_paths() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "sub_dir/innerValue")?;

    let output = run_tool(&[
        "search",
        "camelcase",
        target(&dir),
        "--recursive",
        "--matches",
    ])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["sub_dir/innerValue"]);
    Ok(())
}

#[test]
fn test_search_non_recursive_stays_at_top_level() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "fooBar")?;
    create_entry(dir.path(), "b/foo_bar")?;

    let output = run_tool(&["search", "camelcase", target(&dir)])?;
    assert!(output.status.success());
    // Only the top-level violation prints; foo_bar is never visited.
    assert_eq!(stdout_lines(&output), vec!["b"]);
    Ok(())
}

#[test]
fn test_search_strict_variant_narrows_matches() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "fooBar.txt")?;
    create_entry(dir.path(), "fooBar.TXT")?;

    let output = run_tool(&["search", "camelcase", target(&dir), "--matches"])?;
    assert!(output.status.success());
    let mut lines = stdout_lines(&output);
    lines.sort();
    assert_eq!(lines, vec!["fooBar.TXT", "fooBar.txt"]);

    let output = run_tool(&["search", "camelcase", target(&dir), "--matches", "--strict"])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["fooBar.txt"]);
    Ok(())
}
