#[cfg(test)]
mod tests {
    use crate::infrastructure::CacheStore;
    use crate::infrastructure_in_memory::InMemoryCacheStore;
    use crate::types::{EntryValue, ResolvedPath};

    #[test]
    fn test_publish_and_read() {
        let store = InMemoryCacheStore::new();
        store.publish("/demo/conf", "v1");

        let entry = store.read(&ResolvedPath::new("/demo/conf")).unwrap();
        assert_eq!(entry.as_scalar(), Some("v1"));
        assert_eq!(entry.version, 1);

        assert!(store.read(&ResolvedPath::new("/missing")).is_none());
    }

    #[test]
    fn test_rewrite_bumps_version_monotonically() {
        let store = InMemoryCacheStore::new();
        let path = ResolvedPath::new("/demo/conf");

        let mut last = 0;
        for i in 0..5 {
            store.publish("/demo/conf", format!("v{i}"));
            let version = store.read(&path).unwrap().version;
            assert!(version > last);
            last = version;
        }
    }

    #[test]
    fn test_container_entries_keep_child_order() {
        let store = InMemoryCacheStore::new();
        store.publish_children(
            "/demo/hosts",
            vec![
                ("host0".to_string(), "10.0.0.1:80".to_string()),
                ("host1".to_string(), "10.0.0.2:80".to_string()),
            ],
        );

        let entry = store.read(&ResolvedPath::new("/demo/hosts")).unwrap();
        let children = entry.as_children().unwrap();
        assert_eq!(children[0].0, "host0");
        assert_eq!(children[1].0, "host1");
        assert!(matches!(entry.value, EntryValue::Children(_)));
    }

    #[test]
    fn test_remove_and_local_idc() {
        let store = InMemoryCacheStore::new();
        assert_eq!(store.local_idc(), None);

        store.set_local_idc("bj");
        assert_eq!(store.local_idc(), Some("bj".to_string()));

        store.publish("/demo/conf", "v1");
        store.remove("/demo/conf");
        assert!(store.read(&ResolvedPath::new("/demo/conf")).is_none());
    }

    #[test]
    fn test_sync_requests_are_recorded_in_order() {
        let store = InMemoryCacheStore::new();
        store.request_sync(&ResolvedPath::new("/bj/demo/a"));
        store.request_sync(&ResolvedPath::new("/bj/demo/b"));

        assert_eq!(store.sync_requests(), vec!["/bj/demo/a", "/bj/demo/b"]);
    }
}
