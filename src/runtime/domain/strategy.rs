//! Ordered construction strategies.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Keyword arguments passed to an adapter constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorArgs {
    values: BTreeMap<String, Value>,
}

impl ConstructorArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Adds a keyword argument.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Reports whether `name` is supplied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the supplied keyword names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Reports whether no arguments are supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One way of calling an adapter constructor.
///
/// Strategies are tried in [`ConstructionStrategy::ORDER`] and the first
/// that succeeds wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionStrategy {
    /// No arguments.
    NoArgs,
    /// `registry` bound to null.
    WithRegistry,
    /// `config` bound to an empty mapping.
    WithConfig,
    /// Both `registry` and `config`.
    WithBoth,
}

impl ConstructionStrategy {
    /// Every strategy in the order they are attempted.
    pub const ORDER: [Self; 4] = [
        Self::NoArgs,
        Self::WithRegistry,
        Self::WithConfig,
        Self::WithBoth,
    ];

    /// Returns the keyword arguments this strategy supplies.
    #[must_use]
    pub fn arguments(self) -> ConstructorArgs {
        let registry = || Value::Null;
        let config = || Value::Object(Map::new());
        match self {
            Self::NoArgs => ConstructorArgs::new(),
            Self::WithRegistry => ConstructorArgs::new().with("registry", registry()),
            Self::WithConfig => ConstructorArgs::new().with("config", config()),
            Self::WithBoth => ConstructorArgs::new()
                .with("registry", registry())
                .with("config", config()),
        }
    }

    /// Returns the strategy label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoArgs => "no_args",
            Self::WithRegistry => "with_registry",
            Self::WithConfig => "with_config",
            Self::WithBoth => "with_both",
        }
    }
}

impl fmt::Display for ConstructionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
