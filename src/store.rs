use crate::error::Error;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A typed name for a value kept in a [`Store`]
///
/// ```
/// use mood::Key;
///
/// const OUT_DIR: Key<String> = Key::new("out-dir");
/// ```
pub struct Key<T> {
    name: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    pub const fn new(name: &'static str) -> Self {
        Key {
            name,
            _type: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.name).finish()
    }
}

/// A set-once map used to hand data from command registration to command execution
#[derive(Default)]
pub struct Store {
    values: HashMap<&'static str, Box<dyn Any>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`. A key can only be set once.
    pub fn set<T: 'static>(&mut self, key: Key<T>, value: T) -> Result<(), Error> {
        if self.values.contains_key(key.name) {
            return Err(Error::DuplicateStoreKey(key.name));
        }
        tracing::trace!(key = key.name, "store set");
        self.values.insert(key.name, Box::new(value));
        Ok(())
    }

    pub fn get<T: 'static>(&self, key: Key<T>) -> Result<&T, Error> {
        let value = self
            .values
            .get(key.name)
            .ok_or(Error::MissingStoreKey(key.name))?;

        value
            .downcast_ref::<T>()
            .ok_or(Error::StoreTypeMismatch(key.name))
    }

    pub fn contains<T>(&self, key: Key<T>) -> bool {
        self.values.contains_key(key.name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Key<String> = Key::new("target");
    const JOBS: Key<u32> = Key::new("jobs");

    #[test]
    fn get_after_set() {
        let mut store = Store::new();
        store.set(TARGET, "web".to_string()).unwrap();
        store.set(JOBS, 4).unwrap();

        assert_eq!(store.get(TARGET).unwrap(), "web");
        assert_eq!(*store.get(JOBS).unwrap(), 4);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn keys_are_set_once() {
        let mut store = Store::new();
        store.set(JOBS, 1).unwrap();

        let err = store.set(JOBS, 2).unwrap_err();
        assert!(matches!(err, Error::DuplicateStoreKey("jobs")));
        assert_eq!(*store.get(JOBS).unwrap(), 1);
    }

    #[test]
    fn missing_key() {
        let store = Store::new();
        assert!(store.is_empty());
        assert!(!store.contains(TARGET));
        assert!(matches!(
            store.get(TARGET),
            Err(Error::MissingStoreKey("target"))
        ));
    }

    #[test]
    fn same_name_different_type() {
        let mut store = Store::new();
        store.set(JOBS, 8).unwrap();

        let jobs_as_text: Key<String> = Key::new("jobs");
        assert!(matches!(
            store.get(jobs_as_text),
            Err(Error::StoreTypeMismatch("jobs"))
        ));
        assert!(matches!(
            store.set(jobs_as_text, "8".into()),
            Err(Error::DuplicateStoreKey("jobs"))
        ));
    }
}
