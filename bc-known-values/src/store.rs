use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, Once};

use crate::Error;

/// A registry that maintains the bidirectional mapping between known-value
/// codepoints and their assigned names.
///
/// Mirrors `dcbor::TagsStore`'s shape one layer up: a "build once, read
/// many" table, with duplicate-insertion of an identical `(value, name)`
/// pair being a no-op and a conflicting name for an existing value being an
/// error (spec.md §4.2).
#[derive(Clone, Default)]
pub struct KnownValuesStore {
    by_value: HashMap<u64, &'static str>,
    by_name: HashMap<&'static str, u64>,
}

impl KnownValuesStore {
    pub fn new<T>(entries: T) -> Self
    where
        T: IntoIterator<Item = (u64, &'static str)>,
    {
        let mut store = Self::default();
        for (value, name) in entries {
            store.insert(value, name).expect("bundled known values must not conflict");
        }
        store
    }

    pub fn insert(&mut self, value: u64, name: &'static str) -> crate::Result<()> {
        if let Some(existing) = self.by_value.get(&value) {
            if *existing != name {
                return Err(Error::ConflictingName(value, existing.to_string(), name.to_string()));
            }
            return Ok(());
        }
        self.by_value.insert(value, name);
        self.by_name.insert(name, value);
        Ok(())
    }

    pub fn name_for_value(&self, value: u64) -> String {
        self.by_value
            .get(&value)
            .map(|s| s.to_string())
            .unwrap_or_else(|| value.to_string())
    }

    pub fn value_for_name(&self, name: &str) -> Option<crate::KnownValue> {
        self.by_name.get(name).copied().map(crate::KnownValue::new)
    }
}

struct LazyKnownValuesStore {
    init: Once,
    data: Mutex<Option<KnownValuesStore>>,
}

pub static GLOBAL_KNOWN_VALUES: LazyKnownValuesStore = LazyKnownValuesStore {
    init: Once::new(),
    data: Mutex::new(None),
};

impl LazyKnownValuesStore {
    fn get(&self) -> MutexGuard<'_, Option<KnownValuesStore>> {
        self.init.call_once(|| {
            *self.data.lock().unwrap() = Some(KnownValuesStore::new(crate::registry::BUNDLED));
        });
        self.data.lock().unwrap()
    }
}

/// Accesses the global known-values registry in a read-only manner.
pub fn with_known_values<F, T>(action: F) -> T
where
    F: FnOnce(&KnownValuesStore) -> T,
{
    let binding = GLOBAL_KNOWN_VALUES.get();
    action(binding.as_ref().unwrap())
}

/// Accesses the global known-values registry in a mutable manner, e.g. to
/// register runtime-loaded additions.
pub fn with_known_values_mut<F, T>(action: F) -> T
where
    F: FnOnce(&mut KnownValuesStore) -> T,
{
    let mut binding = GLOBAL_KNOWN_VALUES.get();
    action(binding.as_mut().unwrap())
}
