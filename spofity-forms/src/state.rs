use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Shared value cell owned by a host screen.
///
/// `State<T>` is the handle a screen passes to a controlled field (and to
/// rules that need another field's live value). It uses `Arc<RwLock<T>>`
/// internally, so clones are cheap and every clone observes the same value.
///
/// Each write bumps a version counter. Readers that cache a value can
/// compare versions to learn whether somebody else wrote in between.
///
/// # Example
///
/// ```
/// use spofity_forms::State;
///
/// let password = State::new(String::new());
/// let mirror = password.clone();
///
/// password.set("secret123".to_string());
/// assert_eq!(mirror.get(), "secret123");
/// assert_eq!(mirror.version(), 1);
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    version: Arc<AtomicU64>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Update the value using a closure
    ///
    /// A lock poisoned by a panicking writer is recovered, same as on reads.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of writes since creation.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Returns `true` if both handles point at the same cell.
    pub fn same_cell(&self, other: &State<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            version: Arc::clone(&self.version),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
