//! A read-only property map whose values are computed by a closure on
//! every read rather than stored. Useful for a property that is cheap to
//! derive from others (e.g. "degree", "distance from a fixed vertex")
//! and not worth keeping in sync by hand.

use std::any::{Any, TypeId};
use std::marker::PhantomData;

use crate::property::{Property, PropertyMap};

/// Answers reads of property `P` by calling `compute`; reads of any other
/// property fall back to that property's own default, the same as an
/// empty [`crate::property::DictionaryPropertyMap`] would.
pub struct Computed<P, K, F> {
    compute: F,
    _marker: PhantomData<fn(K) -> P>,
}

impl<P, K, F> Computed<P, K, F> {
    pub fn new(compute: F) -> Self {
        Computed { compute, _marker: PhantomData }
    }
}

impl<P, K, F> PropertyMap for Computed<P, K, F>
where
    P: Property,
    K: Copy + Eq,
    F: Fn(K) -> P::Value,
{
    type Key = K;

    fn get<Q: Property>(&self, key: K) -> Q::Value {
        if TypeId::of::<Q>() == TypeId::of::<P>() {
            let value: Box<dyn Any> = Box::new((self.compute)(key));
            if let Ok(value) = value.downcast::<Q::Value>() {
                return *value;
            }
        }
        Q::default_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Degree;
    impl Property for Degree {
        type Value = usize;
        fn default_value() -> usize {
            0
        }
    }

    struct Label;
    impl Property for Label {
        type Value = &'static str;
        fn default_value() -> &'static str {
            "?"
        }
    }

    #[test]
    fn computed_property_is_recomputed_per_read() {
        let degrees = [3usize, 1, 4, 1, 5];
        let map: Computed<Degree, usize, _> = Computed::new(|k: usize| degrees[k]);
        assert_eq!(map.get::<Degree>(2), 4);
        assert_eq!(map.get::<Degree>(4), 5);
    }

    #[test]
    fn reading_a_different_property_yields_its_default() {
        let map: Computed<Degree, usize, _> = Computed::new(|_| 7usize);
        assert_eq!(map.get::<Label>(0), "?");
    }
}
