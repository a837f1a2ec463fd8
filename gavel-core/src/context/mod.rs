//! Substitution values handed to the message renderer.

pub mod builders;

use dashmap::DashMap;
use thiserror::Error;

/// One key/value substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("context pairs must not be empty")]
    EmptyPairs,
}

/// Concatenate pair lists in order. When the result is turned into a
/// [`ContextProperties`], later entries override earlier ones with the same key.
pub fn combine<I>(lists: I) -> Vec<Pair>
where
    I: IntoIterator<Item = Vec<Pair>>,
{
    lists.into_iter().flatten().collect()
}

/// String property bag that can be read and written from several threads.
#[derive(Debug, Default)]
pub struct ContextProperties {
    properties: DashMap<String, String>,
}

impl ContextProperties {
    /// Build a bag from `pairs`, inserted in order. An empty list is rejected.
    pub fn of<I>(pairs: I) -> Result<Self, ContextError>
    where
        I: IntoIterator<Item = Pair>,
    {
        let ctx = Self::default();
        for pair in pairs {
            ctx.put(pair.key, pair.value);
        }

        if ctx.properties.is_empty() {
            return Err(ContextError::EmptyPairs);
        }

        Ok(ctx)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.properties.get(key).map(|value| value.value().clone())
    }

    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Snapshot of every entry, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.properties
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
    }
}
