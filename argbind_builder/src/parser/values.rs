use std::collections::{HashMap, HashSet};

use crate::api::{Bindable, ExtractError};
use crate::model::Value;

/// The validated value set of a successful parse.
///
/// Maps each identity of the specification (options, the unparsed collector and presence accessors) to its final value, after defaulting and coercion.
/// Also records which identities were seen on the Cli.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundValues {
    values: HashMap<String, Value>,
    present: HashSet<String>,
}

impl BoundValues {
    pub(crate) fn new(values: HashMap<String, Value>, present: HashSet<String>) -> Self {
        Self { values, present }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Create a bound value set directly, for testing a hand-written `OptionContract::construct`.
    ///
    /// ### Example
    /// ```
    /// # #[cfg(feature = "unit_test")]
    /// # {
    /// # use argbind_builder as argbind;
    /// use argbind::{BoundValues, Value};
    ///
    /// let mut values = BoundValues::test_values([("count", Value::Unsigned(2))], ["count"]);
    /// assert!(values.is_present("count"));
    /// assert_eq!(values.take::<u8>("count").unwrap(), 2);
    /// # }
    /// ```
    #[cfg(any(test, feature = "unit_test"))]
    pub fn test_values<K, P>(
        values: impl IntoIterator<Item = (K, Value)>,
        present: impl IntoIterator<Item = P>,
    ) -> Self
    where
        K: Into<String>,
        P: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            present: present.into_iter().map(Into::into).collect(),
        }
    }

    /// The value bound to the identity, if any.
    pub fn get(&self, identity: &str) -> Option<&Value> {
        self.values.get(identity)
    }

    /// Whether the option (or unparsed collector) was supplied on the Cli.
    pub fn is_present(&self, identity: &str) -> bool {
        self.present.contains(identity)
    }

    /// Remove the value bound to the identity, extracting it as `T`.
    pub fn take<T: Bindable>(&mut self, identity: &str) -> Result<T, ExtractError> {
        let value = self
            .values
            .remove(identity)
            .ok_or_else(|| ExtractError::Unbound(identity.to_string()))?;
        T::from_value(value).map_err(|source| ExtractError::Mismatch {
            identity: identity.to_string(),
            source,
        })
    }

    /// Iterate the bound values, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(identity, value)| (identity.as_str(), value))
    }

    /// The number of bound identities.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no bound identities.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
