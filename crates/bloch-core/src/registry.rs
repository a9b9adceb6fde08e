//! Generic name → factory registry for pluggable backends.
//!
//! The same mechanism backs all three extension points (solver backends,
//! file readers, file writers): a registry instance maps unique names to
//! zero-argument factories producing owned instances. Registries are
//! plain owned values — construct them once at program start, register
//! every backend explicitly, then treat them as read-mostly. There is no
//! removal operation; registrations accumulate for the lifetime of the
//! registry.
//!
//! Concurrent registration or lookup from multiple threads is the
//! owner's concern; the design assumes single-threaded startup
//! registration followed by lookups.

use indexmap::IndexMap;

use crate::error::RegistryError;

/// A boxed zero-argument factory producing an owned `T`.
pub type Factory<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Maps backend names to factories producing owned instances.
///
/// Insertion order is preserved, so [`names()`](Registry::names) lists
/// backends in registration order.
///
/// # Examples
///
/// ```
/// use bloch_core::Registry;
///
/// let mut registry: Registry<u32> = Registry::new();
/// registry.register("answer", || 42).unwrap();
/// assert_eq!(registry.create("answer").unwrap(), 42);
/// assert_eq!(registry.names(), vec!["answer"]);
/// assert!(registry.create("question").is_err());
/// ```
pub struct Registry<T> {
    entries: IndexMap<String, Factory<T>>,
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Bind `name` to `factory`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if `name` is bound.
    /// The existing binding is left untouched.
    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        if self.entries.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered {
                name: name.to_string(),
            });
        }
        self.entries.insert(name.to_string(), Box::new(factory));
        Ok(())
    }

    /// Invoke the factory bound to `name` and return the new instance.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if `name` is not bound.
    pub fn create(&self, name: &str) -> Result<T, RegistryError> {
        let factory = self.entries.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;
        Ok(factory())
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The currently bound names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}
