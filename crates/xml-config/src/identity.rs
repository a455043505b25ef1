use std::collections::HashMap;

/// Metadata for one resolvable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityInfo {
    pub name: String,
    pub namespace: Option<String>,
}

impl IdentityInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Lookup table resolving identity names, optionally scoped by schema
/// revision, to identity metadata. Populated by the schema provider before
/// strategies are built; read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct IdentityRegistry {
    entries: HashMap<String, HashMap<Option<String>, IdentityInfo>>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `info` under its own name at the given revision.
    pub fn add(&mut self, revision: Option<&str>, info: IdentityInfo) {
        self.entries
            .entry(info.name.clone())
            .or_default()
            .insert(revision.map(String::from), info);
    }

    /// Exact match on the optional revision. An unscoped lookup that misses
    /// falls back to the sole entry when the identity has exactly one
    /// registered revision.
    pub fn resolve(&self, name: &str, revision: Option<&str>) -> Option<&IdentityInfo> {
        let revisions = self.entries.get(name)?;
        if let Some(info) = revisions.get(&revision.map(String::from)) {
            return Some(info);
        }
        if revision.is_none() && revisions.len() == 1 {
            return revisions.values().next();
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
