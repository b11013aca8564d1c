/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Generates a model structure together with its builder.
///
/// Every member is optional. Members are declared as `(setter, getter, "wireName"): Type`, with
/// three variations:
///
/// - `(set_items, items, "items"): [Item]` declares a list; `items(item)` appends.
/// - `(set_attrs, attrs, clear_attrs, "attrs"): {Value}` declares a string keyed map;
///   `attrs(key, value)` adds one entry and rejects duplicate keys.
/// - `(set_secret, secret, "secret", sensitive): Type` hides the value in debug output.
///
/// ```
/// use smithy_types::structure;
///
/// structure! {
///     /// A key/value label.
///     pub struct Label (LabelBuilder) {
///         (set_key, key, "Key"): String,
///         (set_value, value, "Value"): String,
///     }
/// }
///
/// let label = Label::builder().key("env").value("prod").build();
/// assert_eq!(label.key(), Some(&"env".to_string()));
/// assert_eq!(format!("{:?}", label), "{Key: env, Value: prod}");
/// ```
#[macro_export]
macro_rules! structure {
    (@munch $header:tt [$($done:tt)*]) => {
        $crate::structure! { @emit $header [$($done)*] }
    };
    (@munch $header:tt [$($done:tt)*]
        $(#[$fmeta:meta])* ($set:ident, $get:ident, $wire:tt): [$item:ty] $(, $($rest:tt)*)?
    ) => {
        $crate::structure! {
            @munch $header
            [$($done)* { list [$(#[$fmeta])*] $set $get _ $wire false ($item) (::std::vec::Vec<$item>) }]
            $($($rest)*)?
        }
    };
    (@munch $header:tt [$($done:tt)*]
        $(#[$fmeta:meta])* ($set:ident, $get:ident, $clear:ident, $wire:tt): {$value:ty} $(, $($rest:tt)*)?
    ) => {
        $crate::structure! {
            @munch $header
            [$($done)* {
                map [$(#[$fmeta])*] $set $get $clear $wire false ($value)
                (::std::collections::HashMap<::std::string::String, $value>)
            }]
            $($($rest)*)?
        }
    };
    (@munch $header:tt [$($done:tt)*]
        $(#[$fmeta:meta])* ($set:ident, $get:ident, $wire:tt, sensitive): $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::structure! {
            @munch $header
            [$($done)* { value [$(#[$fmeta])*] $set $get _ $wire true ($ty) ($ty) }]
            $($($rest)*)?
        }
    };
    (@munch $header:tt [$($done:tt)*]
        $(#[$fmeta:meta])* ($set:ident, $get:ident, $wire:tt): $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::structure! {
            @munch $header
            [$($done)* { value [$(#[$fmeta])*] $set $get _ $wire false ($ty) ($ty) }]
            $($($rest)*)?
        }
    };

    (@getter value [$(#[$fmeta:meta])*] $get:ident ($elem:ty) ($full:ty)) => {
        $(#[$fmeta])*
        pub fn $get(&self) -> ::std::option::Option<&$elem> {
            self.$get.as_ref()
        }
    };
    (@getter list [$(#[$fmeta:meta])*] $get:ident ($elem:ty) ($full:ty)) => {
        $(#[$fmeta])*
        pub fn $get(&self) -> ::std::option::Option<&[$elem]> {
            self.$get.as_deref()
        }
    };
    (@getter map [$(#[$fmeta:meta])*] $get:ident ($elem:ty) ($full:ty)) => {
        $(#[$fmeta])*
        pub fn $get(&self) -> ::std::option::Option<&$full> {
            self.$get.as_ref()
        }
    };

    (@setter value [$(#[$fmeta:meta])*] $set:ident $get:ident $clear:tt ($elem:ty) ($full:ty)) => {
        $(#[$fmeta])*
        pub fn $get(mut self, input: impl ::std::convert::Into<$elem>) -> Self {
            self.$get = ::std::option::Option::Some(input.into());
            self
        }
        $(#[$fmeta])*
        pub fn $set(mut self, input: ::std::option::Option<$elem>) -> Self {
            self.$get = input;
            self
        }
    };
    (@setter list [$(#[$fmeta:meta])*] $set:ident $get:ident $clear:tt ($elem:ty) ($full:ty)) => {
        #[doc = concat!("Appends an item to `", stringify!($get), "`.")]
        #[doc = ""]
        #[doc = concat!("To override the contents of this collection use [`", stringify!($set), "`](Self::", stringify!($set), ").")]
        #[doc = ""]
        $(#[$fmeta])*
        pub fn $get(mut self, input: impl ::std::convert::Into<$elem>) -> Self {
            let mut v = self.$get.unwrap_or_default();
            v.push(input.into());
            self.$get = ::std::option::Option::Some(v);
            self
        }
        $(#[$fmeta])*
        pub fn $set(mut self, input: ::std::option::Option<$full>) -> Self {
            self.$get = input;
            self
        }
    };
    (@setter map [$(#[$fmeta:meta])*] $set:ident $get:ident $clear:ident ($elem:ty) ($full:ty)) => {
        #[doc = concat!("Adds one entry to `", stringify!($get), "`.")]
        #[doc = ""]
        #[doc = "Fails without touching the map when `k` is already present."]
        #[doc = ""]
        $(#[$fmeta])*
        pub fn $get(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<$elem>,
        ) -> ::std::result::Result<&mut Self, $crate::error::DuplicateKeyError> {
            let key = k.into();
            let map = self.$get.get_or_insert_with(::std::default::Default::default);
            if map.contains_key(&key) {
                return ::std::result::Result::Err($crate::error::DuplicateKeyError::new(key));
            }
            map.insert(key, v.into());
            ::std::result::Result::Ok(self)
        }
        #[doc = concat!("Removes every entry of `", stringify!($get), "`, leaving it unset.")]
        pub fn $clear(&mut self) -> &mut Self {
            self.$get = ::std::option::Option::None;
            self
        }
        $(#[$fmeta])*
        pub fn $set(mut self, input: ::std::option::Option<$full>) -> Self {
            self.$get = input;
            self
        }
    };

    (@hash map $field:expr, $state:ident) => {
        $crate::shape::hash_map_field(&$field, $state)
    };
    (@hash $kind:ident $field:expr, $state:ident) => {
        ::std::hash::Hash::hash(&$field, $state)
    };

    (@emit [$(#[$meta:meta])* $name:ident $builder:ident]
        [$({
            $kind:ident [$(#[$fmeta:meta])*] $set:ident $get:ident $clear:tt $wire:tt $sensitive:tt
            ($elem:ty) ($full:ty)
        })*]
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, PartialEq, Eq, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $get: ::std::option::Option<$full>,
            )*
        }

        impl $name {
            $( $crate::structure!(@getter $kind [$(#[$fmeta])*] $get ($elem) ($full)); )*

            #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`].")]
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        impl ::std::hash::Hash for $name {
            #[allow(unused_variables)]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $( $crate::structure!(@hash $kind self.$get, state); )*
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::shape::DebugFields::new(f)
                    $( .field($wire, self.$get.as_ref(), $sensitive) )*
                    .finish()
            }
        }

        impl $crate::shape::RenderField for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(self, f)
            }
        }

        impl $crate::shape::Shape for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [&'static str] = &[$($wire),*];
        }

        #[doc = concat!("A builder for [`", stringify!($name), "`].")]
        #[derive(Clone, PartialEq, Default)]
        pub struct $builder {
            $( $get: ::std::option::Option<$full>, )*
        }

        impl $builder {
            $( $crate::structure!(@setter $kind [$(#[$fmeta])*] $set $get $clear ($elem) ($full)); )*

            #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
            pub fn build(self) -> $name {
                $name {
                    $( $get: self.$get, )*
                }
            }
        }

        impl ::std::fmt::Debug for $builder {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::shape::DebugFields::new(f)
                    $( .field($wire, self.$get.as_ref(), $sensitive) )*
                    .finish()
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident ($builder:ident) {
            $($fields:tt)*
        }
    ) => {
        $crate::structure! {
            @munch [$(#[$meta])* $name $builder] [] $($fields)*
        }
    };
}

/// Generates a string enumeration with an `Unknown` fallback for values added to the model
/// after this crate was generated.
///
/// ```
/// use smithy_types::string_enum;
///
/// string_enum! {
///     pub enum Switch {
///         On = "ON",
///         Off = "OFF",
///     }
/// }
///
/// assert_eq!(Switch::from("ON"), Switch::On);
/// assert!(Switch::from("DIMMED").is_unknown());
/// assert!(Switch::try_parse("DIMMED").is_err());
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Eq, Ord, PartialEq, PartialOrd, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// A value unknown to this version of the model.
            Unknown($crate::unknown::UnknownVariantValue),
        }

        impl $name {
            /// Returns the wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $token, )*
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Returns every known wire value, in declaration order.
            pub const fn values() -> &'static [&'static str] {
                &[$($token),*]
            }

            /// Parses a wire value, rejecting anything outside the known set.
            pub fn try_parse(value: &str) -> ::std::result::Result<Self, $crate::error::UnknownVariantError> {
                match value {
                    $( $token => ::std::result::Result::Ok($name::$variant), )*
                    other => ::std::result::Result::Err(
                        $crate::error::UnknownVariantError::new(stringify!($name), other),
                    ),
                }
            }

            /// Whether the value is outside the known set.
            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $token => $name::$variant, )*
                    other => $name::Unknown($crate::unknown::UnknownVariantValue::new(stringify!($name), other)),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(s: ::std::string::String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok($name::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::shape::RenderField for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                ::std::result::Result::Ok($name::from(value))
            }
        }
    };
}

#[cfg(test)]
mod test {
    use crate::error::DuplicateKeyError;
    use crate::shape::Shape;
    use crate::Instant;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    string_enum! {
        pub enum Color {
            Red = "RED",
            Green = "GREEN",
        }
    }

    structure! {
        /// A fixture shape exercising every member kind.
        pub struct Widget (WidgetBuilder) {
            /// Name of the widget.
            (set_name, name, "name"): String,
            (set_count, count, "count"): i32,
            (set_color, color, "color"): Color,
            (set_created, created, "createdAt"): Instant,
            (set_parts, parts, "parts"): [String],
            (set_labels, labels, clear_labels, "labels"): {String},
            (set_token, token, "token", sensitive): String,
            (set_child, child, "child"): Part,
        }
    }

    structure! {
        pub struct Part (PartBuilder) {
            (set_id, id, "id"): i64,
        }
    }

    structure! {
        pub struct Nothing (NothingBuilder) {}
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn empty_structures_render_as_braces() {
        assert_eq!(format!("{:?}", Widget::builder().build()), "{}");
        assert_eq!(format!("{:?}", Nothing::builder().build()), "{}");
        assert_eq!(Widget::builder().build(), Widget::default());
    }

    #[test]
    fn debug_lists_present_members_in_declaration_order() {
        let mut builder = Widget::builder()
            .token("secret")
            .parts("b")
            .parts("a")
            .name("w")
            .color(Color::Green)
            .child(Part::builder().id(7).build())
            .created(Instant::from_epoch_seconds(0));
        builder.labels("z", "1").unwrap().labels("y", "2").unwrap();
        assert_eq!(
            format!("{:?}", builder.build()),
            "{name: w, color: GREEN, createdAt: 1970-01-01T00:00:00Z, parts: [b, a], \
             labels: {y=2, z=1}, token: *** Sensitive Data Redacted ***, child: {id: 7}}"
        );
    }

    #[test]
    fn builder_debug_matches_structure_debug() {
        let builder = Widget::builder().name("w").count(3);
        assert_eq!(format!("{:?}", builder), "{name: w, count: 3}");
    }

    #[test]
    fn duplicate_map_keys_are_rejected() {
        let mut builder = Widget::builder();
        builder.labels("k", "first").unwrap();
        assert_eq!(
            builder.labels("k", "second").unwrap_err(),
            DuplicateKeyError::new("k")
        );
        let widget = builder.build();
        assert_eq!(widget.labels().unwrap().get("k").unwrap(), "first");
    }

    #[test]
    fn clear_resets_the_map_to_absent() {
        let mut builder = Widget::builder();
        builder.labels("k", "v").unwrap();
        builder.clear_labels();
        assert_eq!(builder.build().labels(), None);
    }

    #[test]
    fn list_setter_replaces_and_appends() {
        let widget = Widget::builder()
            .set_parts(Some(vec!["x".to_owned()]))
            .parts("y")
            .parts("y")
            .build();
        assert_eq!(widget.parts(), Some(&["x".to_owned(), "y".to_owned(), "y".to_owned()][..]));
    }

    #[test]
    fn set_none_clears_a_value() {
        let widget = Widget::builder().name("w").set_name(None).build();
        assert_eq!(widget.name(), None);
    }

    #[test]
    fn shape_metadata() {
        assert_eq!(Widget::NAME, "Widget");
        assert_eq!(
            Widget::MEMBERS,
            &["name", "count", "color", "createdAt", "parts", "labels", "token", "child"]
        );
        assert!(Nothing::MEMBERS.is_empty());
    }

    #[test]
    fn serde_uses_wire_names_and_skips_absent_members() {
        let widget = Widget::builder()
            .name("w")
            .color("BLUE")
            .created(Instant::from_epoch_seconds(5))
            .build();
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "w", "color": "BLUE", "createdAt": 5})
        );
        let parsed: Widget =
            serde_json::from_str(r#"{"name":"w","color":"BLUE","createdAt":5,"extra":1}"#).unwrap();
        assert_eq!(parsed, widget);
    }

    #[test]
    fn enum_conversions() {
        assert_eq!(Color::from("RED"), Color::Red);
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
        assert_eq!(Color::from("BLUE".to_owned()).as_str(), "BLUE");
        assert!(Color::from("BLUE").is_unknown());
        assert!(!Color::Red.is_unknown());
        assert_eq!(Color::values(), &["RED", "GREEN"]);
        assert_eq!(Color::try_parse("RED"), Ok(Color::Red));
        assert_eq!(
            Color::try_parse("red").unwrap_err().to_string(),
            "`red` is not a known value of Color"
        );
        assert_eq!(format!("{:?} {}", Color::Red, Color::Green), "RED GREEN");
    }

    fn widget_strategy() -> impl Strategy<Value = Widget> {
        (
            proptest::option::of("[a-z]{0,8}"),
            proptest::option::of(any::<i32>()),
            proptest::option::of(prop_oneof![Just("RED".to_owned()), Just("GREEN".to_owned()), "[A-Z]{1,5}"]),
            proptest::option::of(proptest::collection::vec("[a-z]{0,3}", 0..4)),
            proptest::option::of(proptest::collection::hash_map("[a-z]{1,3}", "[a-z]{0,3}", 0..6)),
        )
            .prop_map(|(name, count, color, parts, labels)| {
                Widget::builder()
                    .set_name(name)
                    .set_count(count)
                    .set_color(color.map(Color::from))
                    .set_parts(parts)
                    .set_labels(labels)
                    .build()
            })
    }

    proptest! {
        #[test]
        fn copies_are_equal_and_hash_equal(widget in widget_strategy()) {
            let copy = Widget::builder()
                .set_name(widget.name.clone())
                .set_count(widget.count)
                .set_color(widget.color.clone())
                .set_parts(widget.parts.clone())
                .set_labels(widget.labels.clone())
                .build();
            prop_assert_eq!(&copy, &widget);
            prop_assert_eq!(hash_of(&copy), hash_of(&widget));
        }

        #[test]
        fn typed_and_raw_enum_setters_agree(raw in prop_oneof![Just("RED".to_owned()), Just("GREEN".to_owned()), "[A-Z]{1,5}"]) {
            let typed = Widget::builder().color(Color::from(raw.as_str())).build();
            let untyped = Widget::builder().color(raw.as_str()).build();
            prop_assert_eq!(&typed, &untyped);
            prop_assert_eq!(hash_of(&typed), hash_of(&untyped));
        }

        #[test]
        fn absent_never_equals_present(name in "[a-z]{0,8}") {
            let present = Widget::builder().name(name).build();
            prop_assert_ne!(present, Widget::default());
        }
    }
}
