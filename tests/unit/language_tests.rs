/*!
 * Tests for the supported language set
 */

use hookline::language::{TargetLanguage, supported_codes};

/// Test that every supported code parses back to its language
#[test]
fn test_parse_withSupportedCodes_shouldSucceed() {
    for language in TargetLanguage::all() {
        let parsed = TargetLanguage::parse(language.code()).expect("Failed to parse");
        assert_eq!(parsed, *language);
    }
}

/// Test that parsing trims and lowercases input
#[test]
fn test_parse_withWhitespaceAndCase_shouldNormalize() {
    assert_eq!(TargetLanguage::parse(" DE ").unwrap(), TargetLanguage::German);
    assert_eq!(TargetLanguage::parse("Ko").unwrap(), TargetLanguage::Korean);
}

/// Test that codes outside the supported set are rejected
#[test]
fn test_parse_withUnsupportedCode_shouldFail() {
    for code in ["en", "it", "zz", "", "german"] {
        assert!(TargetLanguage::parse(code).is_err(), "{:?} should be rejected", code);
    }
}

/// Test that the rejection message names the supported set
#[test]
fn test_parse_withUnsupportedCode_shouldListSupportedCodes() {
    let error = TargetLanguage::parse("it").unwrap_err().to_string();
    assert!(error.contains("de"));
    assert!(error.contains("ja"));
}

/// Test that the supported set has no duplicates
#[test]
fn test_supportedCodes_shouldBeUnique() {
    let codes = supported_codes();
    let mut deduped = codes.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(codes.len(), deduped.len());
    assert_eq!(codes.len(), 7);
}

/// Test that display names resolve through the ISO tables
#[test]
fn test_displayName_shouldResolveEnglishNames() {
    assert_eq!(TargetLanguage::German.display_name(), "German");
    assert_eq!(TargetLanguage::Japanese.display_name(), "Japanese");
}
