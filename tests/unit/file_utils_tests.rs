/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use nbtrans::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "exists.ipynb", "{}")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.ipynb"));
}

/// Test that dir_exists distinguishes directories from files and absences
#[test]
fn test_dir_exists_withDirFileAndMissingPath_shouldDistinguish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(&temp_dir.path().to_path_buf(), "plain.ipynb", "{}")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
    assert!(!FileManager::dir_exists(temp_dir.path().join("missing")));

    Ok(())
}

/// Test that find_notebooks discovers notebook files recursively
#[test]
fn test_find_notebooks_withNestedDirs_shouldFindAllNotebooks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let nested = root.join("week1");
    fs::create_dir_all(&nested)?;

    common::create_test_file(&root, "intro.ipynb", "{}")?;
    common::create_test_file(&nested, "homework.ipynb", "{}")?;
    common::create_test_file(&nested, "notes.txt", "plain text")?;

    let found = FileManager::find_notebooks(&root, "en")?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("intro.ipynb")));
    assert!(found.iter().any(|p| p.ends_with("homework.ipynb")));

    Ok(())
}

/// Test that find_notebooks skips previously translated outputs
#[test]
fn test_find_notebooks_withTranslatedOutputs_shouldSkipThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();

    common::create_test_file(&root, "lesson.ipynb", "{}")?;
    common::create_test_file(&root, "lesson_en.ipynb", "{}")?;

    let found = FileManager::find_notebooks(&root, "en")?;

    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("lesson.ipynb"));

    Ok(())
}

/// Test that find_notebooks returns results in a deterministic order
#[test]
fn test_find_notebooks_withSeveralFiles_shouldReturnSortedPaths() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();

    common::create_test_file(&root, "b.ipynb", "{}")?;
    common::create_test_file(&root, "a.ipynb", "{}")?;
    common::create_test_file(&root, "c.ipynb", "{}")?;

    let found = FileManager::find_notebooks(&root, "en")?;

    let mut sorted = found.clone();
    sorted.sort();
    assert_eq!(found, sorted);

    Ok(())
}

/// Test that write_to_file creates the file and parent directories
#[test]
fn test_write_to_file_withMissingParentDir_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("result.ipynb");

    FileManager::write_to_file(&target, "{\"cells\": []}")?;

    assert!(target.exists());
    assert_eq!(fs::read_to_string(&target)?, "{\"cells\": []}");

    Ok(())
}

/// Test that read_to_string returns file content correctly
#[test]
fn test_read_to_string_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "{\"cells\": []}";
    let test_file = common::create_test_file(&temp_dir.path().to_path_buf(), "read.ipynb", content)?;

    assert_eq!(FileManager::read_to_string(&test_file)?, content);

    Ok(())
}
