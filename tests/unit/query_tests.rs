/*!
 * Tests for the query layer
 */

use hookline::content::ScriptType;
use hookline::query::{ContentQuery, category_slug};

use crate::common;

/// Test the category slug normalization
#[test]
fn test_categorySlug_shouldLowercaseAndHyphenate() {
    assert_eq!(category_slug("Ex TikTok"), "ex-tiktok");
    assert_eq!(category_slug("New TikTok Algorithm"), "new-tiktok-algorithm");
    assert_eq!(category_slug("professor"), "professor");
}

/// Test that list operations return full collections in stored order
#[test]
fn test_listOperations_shouldReturnStoredOrder() {
    let query = ContentQuery::new(common::sample_document());

    let style_ids: Vec<&str> = query.visual_styles().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(style_ids, vec!["vs1", "vs2"]);

    let hook_ids: Vec<&str> = query.hooks().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(hook_ids, vec!["h1", "h2", "p1"]);

    let script_ids: Vec<&str> = query.scripts().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(script_ids, vec!["s1", "s2", "e1", "vp1"]);
}

/// Test category filtering with a matching slug
#[test]
fn test_hooksByCategory_withMatchingSlug_shouldFilter() {
    let query = ContentQuery::new(common::sample_document());

    let hooks = query.hooks_by_category("ex-tiktok");
    assert_eq!(hooks.len(), 2);
    assert!(hooks.iter().all(|h| h.category == "Ex TikTok"));
}

/// Test that the category match is case-insensitive
#[test]
fn test_hooksByCategory_withMixedCaseSlug_shouldFilter() {
    let query = ContentQuery::new(common::sample_document());
    assert_eq!(query.hooks_by_category("Ex-TikTok").len(), 2);
    assert_eq!(query.hooks_by_category("PROFESSOR").len(), 1);
}

/// Test that a miss yields an empty sequence, never an error
#[test]
fn test_hooksByCategory_withUnknownSlug_shouldReturnEmpty() {
    let query = ContentQuery::new(common::sample_document());
    assert!(query.hooks_by_category("journalist").is_empty());
    assert!(query.hooks_by_category("").is_empty());
}

/// Test type filtering for each tag
#[test]
fn test_scriptsByType_shouldFilterEachTag() {
    let query = ContentQuery::new(common::sample_document());

    assert_eq!(query.scripts_by_type(ScriptType::Other).len(), 2);
    assert_eq!(query.scripts_by_type(ScriptType::Engagement).len(), 1);
    assert_eq!(query.scripts_by_type(ScriptType::ViralPlug).len(), 1);
}

/// Test that the unfiltered listing is exactly the union of the three tags
#[test]
fn test_scripts_shouldEqualUnionOfTypeFilters() {
    let query = ContentQuery::new(common::sample_document());

    let total = query.scripts().len();
    let by_type = query.scripts_by_type(ScriptType::Other).len()
        + query.scripts_by_type(ScriptType::Engagement).len()
        + query.scripts_by_type(ScriptType::ViralPlug).len();

    assert_eq!(total, by_type);
}
