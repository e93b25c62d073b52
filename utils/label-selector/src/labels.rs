use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// Read-only access to a set of labels, ie: a key/value string mapping.
pub trait Labels {
    /// Get the value of the label with the given key, if present.
    fn get(&self, key: &str) -> Option<&str>;
    /// Check if a label with the given key is present, regardless of its value.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: BuildHasher> Labels for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl Labels for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<L: Labels + ?Sized> Labels for &L {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }
}
