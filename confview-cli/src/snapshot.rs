//! Loads a JSON cache snapshot into the in-memory backend so lookups can be
//! exercised without a running agent.
//!
//! Format: `{"local_idc": "bj", "entries": {"/demo/conf": "v1",
//! "/demo/hosts": {"host0": "10.0.0.1:80"}}}` — string values become scalar
//! entries, objects become container entries.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use confview_core::infrastructure_in_memory::InMemoryCacheStore;

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    local_idc: Option<String>,
    #[serde(default)]
    entries: BTreeMap<String, Value>,
}

pub fn load(path: &str) -> Result<InMemoryCacheStore, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read snapshot {path}: {e}"))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).map_err(|e| format!("invalid snapshot {path}: {e}"))?;

    let store = InMemoryCacheStore::new();
    if let Some(idc) = snapshot.local_idc {
        store.set_local_idc(idc);
    }

    for (key, value) in snapshot.entries {
        match value {
            Value::String(scalar) => store.publish(key, scalar),
            Value::Object(children) => {
                let pairs = children
                    .into_iter()
                    .map(|(name, child)| match child {
                        Value::String(v) => Ok((name, v)),
                        other => Err(format!(
                            "child {name} of {key} must be a string, got {other}"
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                store.publish_children(key, pairs);
            }
            other => return Err(format!("entry {key} must be a string or object, got {other}")),
        }
    }

    Ok(store)
}
