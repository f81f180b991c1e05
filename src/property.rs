//! The property system: type-keyed property bags and the maps that key
//! them by a graph's descriptors.
//!
//! A *property* is declared as a zero-sized marker type with an associated
//! value type and a default. A *property bag* stores only the
//! non-default assignments for one vertex or edge and synthesizes the
//! default on read for anything it was never told. A *property map*
//! associates each descriptor of a graph with a bag; `DictionaryPropertyMap`
//! is the default (HashMap-backed) implementation. Computed property maps
//! (read-only, derived from a closure) are graph-level wrappers — see
//! `crate::views::computed`.
//!
//! Each vertex or edge can carry an open-ended set of independently
//! defaulted properties rather than one fixed payload type per engine, so
//! adding a new property never changes an engine's type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::Hash;

/// A declared property: a marker type naming a value type and its default.
///
/// ```
/// use graphlib::property::Property;
///
/// struct Weight;
/// impl Property for Weight {
///     type Value = u32;
///     fn default_value() -> u32 { 1 }
/// }
/// ```
pub trait Property: 'static {
    type Value: Clone + 'static;
    fn default_value() -> Self::Value;
}

/// A polymorphic, type-keyed record for one vertex or edge. Stores only
/// assignments that differ from their property's default; reading an
/// unset property synthesizes the default.
#[derive(Default)]
pub struct PropertyBag {
    values: HashMap<TypeId, Box<dyn Any>>,
}

impl PropertyBag {
    pub fn new() -> Self {
        PropertyBag { values: HashMap::new() }
    }

    /// Read property `P`, falling back to `P::default_value()` if it was
    /// never assigned on this bag.
    pub fn get<P: Property>(&self) -> P::Value {
        self.values
            .get(&TypeId::of::<P>())
            .and_then(|boxed| boxed.downcast_ref::<P::Value>())
            .cloned()
            .unwrap_or_else(P::default_value)
    }

    /// Assign property `P` a non-default value.
    pub fn set<P: Property>(&mut self, value: P::Value) {
        self.values.insert(TypeId::of::<P>(), Box::new(value));
    }

    /// Remove any explicit assignment of `P`, reverting reads to the
    /// default.
    pub fn clear<P: Property>(&mut self) {
        self.values.remove(&TypeId::of::<P>());
    }

    /// True iff no property has ever been explicitly assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A mapping from a graph's descriptors to property bags.
pub trait PropertyMap {
    type Key: Copy + Eq;

    /// Read property `P` on `key`. Descriptors the map has never seen
    /// yield `P`'s default, matching an all-defaults bag.
    fn get<P: Property>(&self, key: Self::Key) -> P::Value;
}

/// A `PropertyMap` whose bags can be written through.
pub trait MutablePropertyMap: PropertyMap {
    fn set<P: Property>(&mut self, key: Self::Key, value: P::Value);
}

/// The default, dictionary-backed property map: a hash map from descriptor
/// to `PropertyBag`, allocating a bag lazily on first write.
pub struct DictionaryPropertyMap<K> {
    bags: HashMap<K, PropertyBag>,
}

impl<K: Copy + Eq + Hash> DictionaryPropertyMap<K> {
    pub fn new() -> Self {
        DictionaryPropertyMap { bags: HashMap::new() }
    }

    /// Drop the stored bag for `key` entirely (all its properties revert
    /// to defaults). Called when an engine removes the element `key`
    /// refers to.
    pub fn remove(&mut self, key: K) {
        self.bags.remove(&key);
    }
}

impl<K: Copy + Eq + Hash> Default for DictionaryPropertyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> PropertyMap for DictionaryPropertyMap<K> {
    type Key = K;

    fn get<P: Property>(&self, key: K) -> P::Value {
        self.bags
            .get(&key)
            .map(PropertyBag::get::<P>)
            .unwrap_or_else(P::default_value)
    }
}

impl<K: Copy + Eq + Hash> MutablePropertyMap for DictionaryPropertyMap<K> {
    fn set<P: Property>(&mut self, key: K, value: P::Value) {
        self.bags.entry(key).or_default().set::<P>(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Weight;
    impl Property for Weight {
        type Value = u32;
        fn default_value() -> u32 {
            1
        }
    }

    struct Label;
    impl Property for Label {
        type Value = &'static str;
        fn default_value() -> &'static str {
            "unlabeled"
        }
    }

    #[test]
    fn unset_property_reads_default() {
        let bag = PropertyBag::new();
        assert_eq!(bag.get::<Weight>(), 1);
        assert_eq!(bag.get::<Label>(), "unlabeled");
    }

    #[test]
    fn set_overrides_default_independently_per_property() {
        let mut bag = PropertyBag::new();
        bag.set::<Weight>(42);
        assert_eq!(bag.get::<Weight>(), 42);
        assert_eq!(bag.get::<Label>(), "unlabeled");
    }

    #[test]
    fn dictionary_map_is_independent_per_key_and_defaults_unknown_keys() {
        let mut map: DictionaryPropertyMap<u32> = DictionaryPropertyMap::new();
        map.set::<Weight>(0, 7);
        assert_eq!(map.get::<Weight>(0), 7);
        assert_eq!(map.get::<Weight>(1), 1);
        map.remove(0);
        assert_eq!(map.get::<Weight>(0), 1);
    }
}
