//! Key-based access to maps, with insertion and removal.
//!
//! [`At`] focuses the optional value stored under a key. The focus is always
//! present (it is `None` for a missing key), so the result is a lens:
//! writing `Some(v)` inserts or replaces, writing `None` removes.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use kaleido::optics::{at, set, view};
//!
//! let scores: HashMap<String, u32> = HashMap::from([("ann".to_string(), 3)]);
//!
//! let ann = at::<HashMap<String, u32>, _>("ann".to_string());
//! assert_eq!(view(&ann, scores.clone()).unwrap(), Some(3));
//!
//! let without_ann = set(&ann, None, scores).unwrap();
//! assert!(without_ann.is_empty());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::{SimpleOptic, lens};

/// Containers with a lens onto the optional value at a key.
pub trait At<K>: Sized + 'static {
    /// The value type stored in this container.
    type Value;

    /// Returns a lens onto the value stored under `key`.
    fn at(key: K) -> SimpleOptic<Self, Option<Self::Value>>;
}

impl<K, V, H> At<K> for HashMap<K, V, H>
where
    K: Clone + Eq + Hash + 'static,
    V: Clone + 'static,
    H: BuildHasher + 'static,
{
    type Value = V;

    fn at(key: K) -> SimpleOptic<Self, Option<V>> {
        let lookup = key.clone();
        lens(
            move |map: &Self| map.get(&lookup).cloned(),
            move |mut map: Self, value: Option<V>| {
                match value {
                    Some(value) => map.insert(key.clone(), value),
                    None => map.remove(&key),
                };
                map
            },
        )
    }
}

impl<K, V> At<K> for BTreeMap<K, V>
where
    K: Clone + Ord + 'static,
    V: Clone + 'static,
{
    type Value = V;

    fn at(key: K) -> SimpleOptic<Self, Option<V>> {
        let lookup = key.clone();
        lens(
            move |map: &Self| map.get(&lookup).cloned(),
            move |mut map: Self, value: Option<V>| {
                match value {
                    Some(value) => map.insert(key.clone(), value),
                    None => map.remove(&key),
                };
                map
            },
        )
    }
}

/// Returns the [`At`] lens of container `C` for `key`.
pub fn at<C: At<K>, K>(key: K) -> SimpleOptic<C, Option<C::Value>> {
    C::at(key)
}
