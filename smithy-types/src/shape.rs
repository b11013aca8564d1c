/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Support code for the [`structure!`](crate::structure) and
//! [`string_enum!`](crate::string_enum) generators.

use crate::instant::{Format, Instant};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Replaces the value of sensitive members in debug output.
pub const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Static description of a generated structure.
pub trait Shape {
    /// The shape name, which is also the Rust type name.
    const NAME: &'static str;

    /// Wire names of the members, in declaration order.
    const MEMBERS: &'static [&'static str];
}

/// How a member value appears in the debug output of the structure containing it.
pub trait RenderField {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl RenderField for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! render_with_display {
    ($($ty:ty),*) => {
        $(
            impl RenderField for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_with_display!(bool, i32, i64);

impl RenderField for Instant {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt(Format::DateTime))
    }
}

impl<T: RenderField> RenderField for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

/// Entries are rendered sorted by key so the output does not depend on hash order.
impl<V: RenderField> RenderField for HashMap<String, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        f.write_str("{")?;
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
            f.write_str("=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Writes `{name: value, ...}` for the members that are set.
pub struct DebugFields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> DebugFields<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        DebugFields {
            f,
            result,
            has_fields: false,
        }
    }

    /// Adds a member. Absent members are skipped.
    pub fn field<T>(&mut self, name: &str, value: Option<&T>, sensitive: bool) -> &mut Self
    where
        T: RenderField + ?Sized,
    {
        if let (Some(value), Ok(())) = (value, self.result) {
            self.result = self.write_field(name, value, sensitive);
            self.has_fields = true;
        }
        self
    }

    fn write_field<T>(&mut self, name: &str, value: &T, sensitive: bool) -> fmt::Result
    where
        T: RenderField + ?Sized,
    {
        if self.has_fields {
            self.f.write_str(", ")?;
        }
        self.f.write_str(name)?;
        self.f.write_str(": ")?;
        if sensitive {
            self.f.write_str(REDACTED)
        } else {
            value.render(self.f)
        }
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }
}

/// Hashes an optional map member independently of iteration order.
///
/// Each entry is hashed on its own and the entry hashes are summed, so two maps that compare
/// equal always feed the same bytes into `state`.
pub fn hash_map_field<V, H>(map: &Option<HashMap<String, V>>, state: &mut H)
where
    V: Hash,
    H: Hasher,
{
    match map {
        None => state.write_u8(0),
        Some(map) => {
            state.write_u8(1);
            let combined = map.iter().fold(0_u64, |acc, (key, value)| {
                let mut entry = DefaultHasher::new();
                key.hash(&mut entry);
                value.hash(&mut entry);
                acc.wrapping_add(entry.finish())
            });
            state.write_usize(map.len());
            state.write_u64(combined);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{hash_map_field, DebugFields, RenderField};
    use crate::Instant;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::fmt;
    use std::hash::Hasher;

    struct Rendered<'a, T: ?Sized>(&'a T);

    impl<T: RenderField + ?Sized> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.render(f)
        }
    }

    struct TwoFields {
        name: Option<String>,
        secret: Option<String>,
    }

    impl fmt::Debug for TwoFields {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            DebugFields::new(f)
                .field("name", self.name.as_ref(), false)
                .field("secret", self.secret.as_ref(), true)
                .finish()
        }
    }

    #[test]
    fn only_present_fields_are_rendered() {
        let empty = TwoFields {
            name: None,
            secret: None,
        };
        assert_eq!(format!("{:?}", empty), "{}");

        let named = TwoFields {
            name: Some("a".to_owned()),
            secret: None,
        };
        assert_eq!(format!("{:?}", named), "{name: a}");

        let secret = TwoFields {
            name: None,
            secret: Some("hunter2".to_owned()),
        };
        assert_eq!(
            format!("{:?}", secret),
            "{secret: *** Sensitive Data Redacted ***}"
        );
    }

    #[test]
    fn collections_render() {
        let list = vec!["a".to_owned(), "b".to_owned()];
        assert_eq!(Rendered(&list).to_string(), "[a, b]");

        let mut map = HashMap::new();
        map.insert("b".to_owned(), 2);
        map.insert("a".to_owned(), 1);
        assert_eq!(Rendered(&map).to_string(), "{a=1, b=2}");

        let instant = Instant::from_epoch_seconds(0);
        assert_eq!(Rendered(&instant).to_string(), "1970-01-01T00:00:00Z");
    }

    fn map_hash(map: &Option<HashMap<String, String>>) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_map_field(map, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn map_hash_ignores_insertion_order() {
        let mut forward = HashMap::new();
        let mut backward = HashMap::new();
        for i in 0..64 {
            forward.insert(format!("key{}", i), format!("value{}", i));
        }
        for i in (0..64).rev() {
            backward.insert(format!("key{}", i), format!("value{}", i));
        }
        assert_eq!(map_hash(&Some(forward)), map_hash(&Some(backward)));
        assert_ne!(map_hash(&None), map_hash(&Some(HashMap::new())));
    }
}
