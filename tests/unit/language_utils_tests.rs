/*!
 * Tests for language code utilities
 */

use anyhow::Result;
use nbtrans::language_utils::{validate_language_code, normalize_to_part2t, get_language_name};

/// Test that two-letter codes validate
#[test]
fn test_validate_language_code_withPart1Code_shouldSucceed() -> Result<()> {
    validate_language_code("en")?;
    validate_language_code("fr")?;

    Ok(())
}

/// Test that three-letter codes validate, including 639-2/B variants
#[test]
fn test_validate_language_code_withPart2Codes_shouldSucceed() -> Result<()> {
    validate_language_code("eng")?;
    validate_language_code("fre")?; // 639-2/B for French

    Ok(())
}

/// Test that junk codes are rejected
#[test]
fn test_validate_language_code_withInvalidCode_shouldFail() {
    assert!(validate_language_code("zz").is_err());
    assert!(validate_language_code("english").is_err());
    assert!(validate_language_code("").is_err());
}

/// Test normalization of two-letter and bibliographic codes
#[test]
fn test_normalize_to_part2t_withVariousCodes_shouldNormalize() -> Result<()> {
    assert_eq!(normalize_to_part2t("en")?, "eng");
    assert_eq!(normalize_to_part2t("fre")?, "fra");
    assert_eq!(normalize_to_part2t("deu")?, "deu");

    Ok(())
}

/// Test language name lookup
#[test]
fn test_get_language_name_withKnownCodes_shouldReturnNames() -> Result<()> {
    assert_eq!(get_language_name("en")?, "English");
    assert_eq!(get_language_name("fr")?, "French");

    Ok(())
}
