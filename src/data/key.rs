use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of an entry in the store: a name or an integer index.
///
/// Strings holding a canonical integer (`"5"`, `"-12"`, but not `"05"`) are
/// read as integer keys, so `Key::from("5") == Key::from(5)`. This keeps the
/// key set intact across a snapshot, where every key is written as a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(Repr);

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Repr {
    Index(i64),
    Name(String),
}

impl Key {
    /// The key as a name, if it is not an integer key.
    pub fn as_name(&self) -> Option<&str> {
        match &self.0 {
            Repr::Name(name) => Some(name),
            Repr::Index(_) => None,
        }
    }

    /// The key as an integer, if it is one.
    pub fn as_index(&self) -> Option<i64> {
        match self.0 {
            Repr::Index(index) => Some(index),
            Repr::Name(_) => None,
        }
    }

    fn parse(raw: &str) -> Option<i64> {
        let index = raw.parse::<i64>().ok()?;
        (index.to_string() == raw).then_some(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Index(index) => write!(f, "{index}"),
            Repr::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        match Key::parse(raw) {
            Some(index) => Key(Repr::Index(index)),
            None => Key(Repr::Name(raw.to_owned())),
        }
    }
}

impl From<String> for Key {
    fn from(raw: String) -> Self {
        match Key::parse(&raw) {
            Some(index) => Key(Repr::Index(index)),
            None => Key(Repr::Name(raw)),
        }
    }
}

impl From<&String> for Key {
    fn from(raw: &String) -> Self {
        Key::from(raw.as_str())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key(Repr::Index(index))
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key(Repr::Index(index.into()))
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key(Repr::Index(index.into()))
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
                Ok(Key::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
                Ok(Key::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
                Ok(Key::from(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
                i64::try_from(v)
                    .map(Key::from)
                    .map_err(|_| E::custom(format!("integer key {v} out of range")))
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

/// One key or a sequence of keys.
///
/// Lets [`Store::delete`](crate::Store::delete) and
/// [`Store::only`](crate::Store::only) take either `"a"` or `["a", "b"]`.
pub trait Keys {
    fn into_keys(self) -> Vec<Key>;
}

macro_rules! single_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keys for $ty {
                fn into_keys(self) -> Vec<Key> {
                    vec![Key::from(self)]
                }
            }
        )*
    };
}

single_key!(Key, &Key, &str, String, &String, i64, i32, u32);

impl<K: Into<Key>> Keys for Vec<K> {
    fn into_keys(self) -> Vec<Key> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<K: Into<Key>, const N: usize> Keys for [K; N] {
    fn into_keys(self) -> Vec<Key> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<K: Into<Key> + Clone> Keys for &[K] {
    fn into_keys(self) -> Vec<Key> {
        self.iter().cloned().map(Into::into).collect()
    }
}
