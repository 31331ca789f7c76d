#[cfg(test)]
mod tests {
    use crate::resolver::KeyResolver;
    use crate::types::ConfError;

    #[test]
    fn test_normalize_anchors_and_trims() {
        assert_eq!(KeyResolver::normalize("demo/conf").unwrap(), "/demo/conf");
        assert_eq!(KeyResolver::normalize("/demo/conf").unwrap(), "/demo/conf");
        assert_eq!(KeyResolver::normalize("//demo/conf///").unwrap(), "/demo/conf");
    }

    #[test]
    fn test_normalize_rejects_empty_keys() {
        for key in ["", "/", "///"] {
            assert!(matches!(
                KeyResolver::normalize(key),
                Err(ConfError::InvalidKey { .. })
            ));
        }
    }

    #[test]
    fn test_candidates_qualified_first_then_global() {
        let paths = KeyResolver::candidates("/demo/conf", Some("bj"), None);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].as_str(), "/bj/demo/conf");
        assert_eq!(paths[1].as_str(), "/demo/conf");
    }

    #[test]
    fn test_candidates_explicit_idc_wins_over_local() {
        let paths = KeyResolver::candidates("/demo/conf", Some("bj"), Some("sh"));
        assert_eq!(paths[0].as_str(), "/bj/demo/conf");
    }

    #[test]
    fn test_candidates_fall_back_to_local_idc() {
        let paths = KeyResolver::candidates("/demo/conf", None, Some("sh"));
        assert_eq!(paths[0].as_str(), "/sh/demo/conf");
        assert_eq!(paths[1].as_str(), "/demo/conf");
    }

    #[test]
    fn test_candidates_treat_empty_idc_as_absent() {
        // An empty explicit idc falls through to the local one
        let paths = KeyResolver::candidates("/demo/conf", Some(""), Some("sh"));
        assert_eq!(paths[0].as_str(), "/sh/demo/conf");

        // Slash-only and whitespace qualifiers never produce a candidate
        for junk in ["", "/", "  ", "//"] {
            let paths = KeyResolver::candidates("/demo/conf", Some(junk), None);
            assert_eq!(paths.len(), 1);
            assert_eq!(paths[0].as_str(), "/demo/conf");
        }
    }

    #[test]
    fn test_candidates_collapse_without_any_idc() {
        let paths = KeyResolver::candidates("/demo/conf", None, None);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].as_str(), "/demo/conf");
    }
}
