//! Search-result post-processing.
//!
//! The search endpoint returns result items whose `more_info_url` field
//! embeds the `prk` and `search_id` values needed by the details and
//! price-chart endpoints. This module pulls those two values out of the URL
//! and surfaces them as top-level string fields on each result item.

use serde_json::Value;

/// Extracts a query parameter value from a URL as a raw substring.
///
/// The value is the text between `"<param>="` (first occurrence) and the
/// next `&`, or the end of the string. No percent-decoding is performed:
/// the returned slice is byte-for-byte what appears in the URL, which is
/// what the details and price-chart endpoints expect back.
///
/// Returns `None` when the parameter does not appear in the URL.
pub(crate) fn extract_query_param<'a>(url: &'a str, param: &str) -> Option<&'a str> {
    let needle = format!("{param}=");
    let start = url.find(&needle)? + needle.len();
    let value = &url[start..];
    match value.find('&') {
        Some(end) => Some(&value[..end]),
        None => Some(value),
    }
}

/// Augments each search result item with `prk` and `search_id` fields
/// extracted from its `more_info_url`.
///
/// Items without a string `more_info_url`, and non-object items, are left
/// untouched. When the URL carries only one of the two parameters, only
/// that field is inserted.
pub(crate) fn augment_search_results(body: &mut Value) {
    let Some(results) = body.get_mut("results").and_then(Value::as_array_mut) else {
        return;
    };

    for item in results {
        let Some(url) = item.get("more_info_url").and_then(Value::as_str) else {
            continue;
        };
        let prk = extract_query_param(url, "prk").map(str::to_owned);
        let search_id = extract_query_param(url, "search_id").map(str::to_owned);

        let Some(object) = item.as_object_mut() else {
            continue;
        };
        if let Some(prk) = prk {
            object.insert("prk".to_string(), Value::String(prk));
        }
        if let Some(search_id) = search_id {
            object.insert("search_id".to_string(), Value::String(search_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === Extraction Tests ===

    #[test]
    fn test_extract_param_followed_by_ampersand() {
        let url = "https://x/?prk=ABC123&search_id=42";
        assert_eq!(extract_query_param(url, "prk"), Some("ABC123"));
        assert_eq!(extract_query_param(url, "search_id"), Some("42"));
    }

    #[test]
    fn test_extract_param_at_end_of_url() {
        let url = "https://x/?search_id=42&prk=ABC123";
        assert_eq!(extract_query_param(url, "prk"), Some("ABC123"));
        assert_eq!(extract_query_param(url, "search_id"), Some("42"));
    }

    #[test]
    fn test_extract_missing_param_returns_none() {
        let url = "https://x/?search_id=42";
        assert_eq!(extract_query_param(url, "prk"), None);
    }

    #[test]
    fn test_extract_empty_value() {
        let url = "https://x/?prk=&search_id=42";
        assert_eq!(extract_query_param(url, "prk"), Some(""));
    }

    #[test]
    fn test_extract_does_not_percent_decode() {
        let url = "https://x/?prk=a%2Bb&search_id=42";
        assert_eq!(extract_query_param(url, "prk"), Some("a%2Bb"));
    }

    // === Augmentation Tests ===

    #[test]
    fn test_augment_inserts_both_fields() {
        let mut body = json!({
            "results": [
                { "name": "Laptop", "more_info_url": "https://x/?prk=ABC123&search_id=42" }
            ]
        });
        augment_search_results(&mut body);

        assert_eq!(body["results"][0]["prk"], "ABC123");
        assert_eq!(body["results"][0]["search_id"], "42");
        // Pre-existing fields are untouched.
        assert_eq!(body["results"][0]["name"], "Laptop");
    }

    #[test]
    fn test_augment_skips_items_without_more_info_url() {
        let mut body = json!({ "results": [{ "name": "Laptop" }] });
        augment_search_results(&mut body);

        assert!(body["results"][0].get("prk").is_none());
        assert!(body["results"][0].get("search_id").is_none());
    }

    #[test]
    fn test_augment_inserts_only_present_params() {
        let mut body = json!({
            "results": [
                { "more_info_url": "https://x/?search_id=42" }
            ]
        });
        augment_search_results(&mut body);

        assert!(body["results"][0].get("prk").is_none());
        assert_eq!(body["results"][0]["search_id"], "42");
    }

    #[test]
    fn test_augment_without_results_is_a_no_op() {
        let mut body = json!({ "count": 0 });
        let expected = body.clone();
        augment_search_results(&mut body);
        assert_eq!(body, expected);
    }

    #[test]
    fn test_augment_tolerates_non_object_items() {
        let mut body = json!({ "results": ["not-an-object", 7] });
        let expected = body.clone();
        augment_search_results(&mut body);
        assert_eq!(body, expected);
    }
}
