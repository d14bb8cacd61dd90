use indexmap::IndexMap;

/// Name of the binding that always holds the most recent result.
pub const LAST_RESULT: &str = "_";

/// Variable bindings shared by successive evaluations.
///
/// Names are case-sensitive. Bindings remember the order in which they were
/// first created so they can be listed predictably; rebinding a name keeps
/// its original position.
///
/// The environment is owned by the caller and passed by mutable reference to
/// [`crate::evaluate`], which only writes to it once an evaluation has fully
/// succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: IndexMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Returns the result of the last successful evaluation, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<f64> {
        self.get(LAST_RESULT)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.insert(name.into(), value);
    }

    /// Removes the binding for `name` and returns its value.
    ///
    /// The relative order of the remaining bindings is preserved.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.bindings.shift_remove(name)
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over `(name, value)` pairs in creation order.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::environment::Environment;
    ///
    /// let mut environment = Environment::new();
    /// environment.set("b", 2.0);
    /// environment.set("a", 1.0);
    /// environment.set("b", 3.0);
    ///
    /// let pairs: Vec<_> = environment.iter().collect();
    /// assert_eq!(pairs, vec![("b", 3.0), ("a", 1.0)]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
