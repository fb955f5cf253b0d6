//! # Response Models
//!
//! A response model is a struct holding one [`Attributes`] store and one
//! memo cell per declared attribute. The [`Model`] trait ties them
//! together: construction, the static schema, the by-name lookup table, and
//! the raw export.
//!
//! ## Declaring a Model
//!
//! ```ignore
//! #[derive(Model)]
//! pub struct Order {
//!     attributes: Attributes,
//!     amount: Scalar,
//!     to_address: Object<Address>,
//!     #[attr(merge = "origin")]
//!     from_address: Object<Address>,
//!     line_items: Collection<LineItem>,
//! }
//! ```
//!
//! For every cell the derive generates an accessor named after the field
//! and a `has_` predicate:
//!
//! | Cell | Accessor | Predicate |
//! |------|----------|-----------|
//! | `Scalar` | `fn n(&self) -> Option<&AttrValue>` | `fn has_n(&self) -> bool` |
//! | `Object<T>` | `fn n(&self) -> Option<&T>` | `fn has_n(&self) -> bool` |
//! | `Collection<T>` | `fn n(&self) -> &[T]` | `fn has_n(&self) -> bool` |
//!
//! Both are computed on first call and cached for the lifetime of the
//! instance. Models can also be written by hand against the same cells.
//!
//! ## By-name Access
//!
//! [`Model::lookup`] dispatches a name through the generated match table and
//! reports unknown names as [`TaxjarError::UnknownAttribute`]. The
//! deprecated [`Model::get`] does the same but logs a warning and swallows
//! unknown names.

mod cell;

use std::fmt;
use std::panic::Location;

pub use cell::{Collection, Object, Scalar};

use crate::attributes::{find_spec, AttrValue, AttributeSpec, Attributes, Fields};
use crate::config::ModelConfig;
use crate::error::Result;

/// A typed response object over an [`Attributes`] store.
pub trait Model: Sized {
    /// Type name used in errors and log records.
    const NAME: &'static str;

    /// One entry per declared attribute.
    const SCHEMA: &'static [AttributeSpec];

    /// Wrap an already normalized store. Cells start empty.
    fn from_attributes(attributes: Attributes) -> Self;

    fn attributes(&self) -> &Attributes;

    /// Dispatch `name` to its accessor.
    ///
    /// `Ok(None)` means the attribute is declared but absent.
    fn lookup(&self, name: &str) -> Result<Option<Lookup<'_>>>;

    fn new(fields: Fields) -> Self {
        Self::from_attributes(Attributes::new(fields))
    }

    fn with_config(fields: Fields, config: ModelConfig) -> Self {
        Self::from_attributes(Attributes::with_config(fields, config))
    }

    /// Build from any value; non-map values give an empty model.
    fn from_value(value: AttrValue) -> Self {
        Self::from_attributes(Attributes::from_value(value, ModelConfig::default()))
    }

    fn from_json_value(value: serde_json::Value) -> Self {
        Self::from_value(value.into())
    }

    /// Decode a response body.
    fn from_json(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        Ok(Self::from_json_value(value))
    }

    /// Look up a declared attribute's spec by name.
    fn spec(name: &str) -> Option<&'static AttributeSpec> {
        find_spec(Self::SCHEMA, name)
    }

    /// Build one `T` per element of the sequence under `key`.
    fn map_collection<T: Model>(&self, key: &str) -> Vec<T> {
        self.attributes().map_collection(key)
    }

    /// The stored field set, shared rather than copied.
    fn as_map(&self) -> &Fields {
        self.attributes().as_map()
    }

    fn to_map(&self) -> Fields {
        self.attributes().to_map()
    }

    fn to_json(&self) -> serde_json::Value {
        self.attributes().to_json()
    }

    /// Fetch an attribute by name.
    ///
    /// Logs a deprecation warning pointing at the caller on every call, and
    /// returns `None` for names the model does not declare.
    #[deprecated(since = "0.1.0", note = "call the generated accessor instead")]
    #[track_caller]
    fn get(&self, name: &str) -> Option<Lookup<'_>> {
        if self.attributes().config().deprecation_warnings {
            let caller = Location::caller();
            tracing::warn!(
                target: "taxjar_model::deprecation",
                model = Self::NAME,
                name,
                %caller,
                "{}: [DEPRECATION] #[{:?}] is deprecated. Use #{} to fetch the value.",
                caller,
                name,
                name
            );
        }
        self.lookup(name).ok().flatten()
    }
}

/// Object-safe view of any model, used for by-name results.
pub trait Record {
    fn model_name(&self) -> &'static str;

    fn fields(&self) -> &Fields;

    /// Same as [`Model::lookup`].
    fn attr(&self, name: &str) -> Result<Option<Lookup<'_>>>;
}

impl<T: Model> Record for T {
    fn model_name(&self) -> &'static str {
        T::NAME
    }

    fn fields(&self) -> &Fields {
        self.as_map()
    }

    fn attr(&self, name: &str) -> Result<Option<Lookup<'_>>> {
        self.lookup(name)
    }
}

/// Result of a by-name attribute lookup.
pub enum Lookup<'a> {
    Value(&'a AttrValue),
    Object(&'a dyn Record),
    Collection(Vec<&'a dyn Record>),
}

impl<'a> Lookup<'a> {
    pub fn collection<T: Record>(items: &'a [T]) -> Self {
        Lookup::Collection(items.iter().map(|item| item as &dyn Record).collect())
    }

    pub fn as_value(&self) -> Option<&'a AttrValue> {
        match self {
            Lookup::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&'a dyn Record> {
        match self {
            Lookup::Object(o) => Some(*o),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[&'a dyn Record]> {
        match self {
            Lookup::Collection(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Debug for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Lookup::Object(o) => f
                .debug_tuple("Object")
                .field(&o.model_name())
                .field(o.fields())
                .finish(),
            Lookup::Collection(items) => f
                .debug_tuple("Collection")
                .field(&items.iter().map(|o| o.fields()).collect::<Vec<_>>())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaxjarError;
    use serde_json::json;
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};

    // Hand-written models, the same shape the derive generates.

    thread_local! {
        static ADDRESS_BUILDS: Cell<usize> = const { Cell::new(0) };
    }

    struct Address {
        attributes: Attributes,
        street: Scalar,
    }

    impl Address {
        fn street(&self) -> Option<&AttrValue> {
            self.street.read(&self.attributes, "street")
        }
    }

    impl Model for Address {
        const NAME: &'static str = "Address";
        const SCHEMA: &'static [AttributeSpec] = &[AttributeSpec::scalar("street")];

        fn from_attributes(attributes: Attributes) -> Self {
            ADDRESS_BUILDS.with(|n| n.set(n.get() + 1));
            Self {
                attributes,
                street: Scalar::default(),
            }
        }

        fn attributes(&self) -> &Attributes {
            &self.attributes
        }

        fn lookup(&self, name: &str) -> Result<Option<Lookup<'_>>> {
            match name {
                "street" => Ok(self.street().map(Lookup::Value)),
                _ => Err(TaxjarError::UnknownAttribute {
                    model: Self::NAME,
                    name: name.to_string(),
                }),
            }
        }
    }

    struct Order {
        attributes: Attributes,
        amount: Scalar,
        to_address: Object<Address>,
        from_address: Object<Address>,
        line_items: Collection<Address>,
    }

    impl Order {
        fn amount(&self) -> Option<&AttrValue> {
            self.amount.read(&self.attributes, "amount")
        }

        fn has_amount(&self) -> bool {
            self.amount.present(&self.attributes, "amount")
        }

        fn to_address(&self) -> Option<&Address> {
            self.to_address.read(&self.attributes, "to_address", None)
        }

        fn has_to_address(&self) -> bool {
            self.to_address.present(&self.attributes, "to_address")
        }

        fn from_address(&self) -> Option<&Address> {
            self.from_address
                .read(&self.attributes, "from_address", Some("origin"))
        }

        fn line_items(&self) -> &[Address] {
            self.line_items.read(&self.attributes, "line_items")
        }
    }

    impl Model for Order {
        const NAME: &'static str = "Order";
        const SCHEMA: &'static [AttributeSpec] = &[
            AttributeSpec::scalar("amount"),
            AttributeSpec::object("to_address"),
            AttributeSpec::object("from_address").merge("origin"),
            AttributeSpec::collection("line_items"),
        ];

        fn from_attributes(attributes: Attributes) -> Self {
            Self {
                attributes,
                amount: Scalar::default(),
                to_address: Object::default(),
                from_address: Object::default(),
                line_items: Collection::default(),
            }
        }

        fn attributes(&self) -> &Attributes {
            &self.attributes
        }

        fn lookup(&self, name: &str) -> Result<Option<Lookup<'_>>> {
            match name {
                "amount" => Ok(self.amount().map(Lookup::Value)),
                "to_address" => Ok(self.to_address().map(|v| Lookup::Object(v))),
                "from_address" => Ok(self.from_address().map(|v| Lookup::Object(v))),
                "line_items" => Ok(Some(Lookup::collection(self.line_items()))),
                _ => Err(TaxjarError::UnknownAttribute {
                    model: Self::NAME,
                    name: name.to_string(),
                }),
            }
        }
    }

    fn order(value: serde_json::Value) -> Order {
        Order::from_json_value(value)
    }

    #[test]
    fn scalar_accessor_reads_coerced_value() {
        let o = order(json!({"amount": "16.50"}));
        assert_eq!(o.amount(), Some(&AttrValue::Float(16.5)));
        assert!(o.has_amount());
    }

    #[test]
    fn scalar_accessor_is_none_for_falsey_or_empty() {
        for value in [json!(false), json!(""), json!([]), json!({}), json!(null)] {
            let o = order(json!({ "amount": value }));
            assert_eq!(o.amount(), None);
            assert!(!o.has_amount());
        }
        let o = order(json!({}));
        assert_eq!(o.amount(), None);
        assert!(!o.has_amount());
    }

    #[test]
    fn zero_is_present() {
        let o = order(json!({"amount": 0}));
        assert!(o.has_amount());
        assert_eq!(o.amount(), Some(&AttrValue::Int(0)));
    }

    #[test]
    fn nested_object_is_built_once_per_instance() {
        let o = order(json!({"to_address": {"street": "1 Main St"}}));
        let before = ADDRESS_BUILDS.with(Cell::get);

        let first = o.to_address().unwrap() as *const Address;
        let second = o.to_address().unwrap() as *const Address;

        assert_eq!(first, second);
        assert_eq!(ADDRESS_BUILDS.with(Cell::get), before + 1);
        assert_eq!(
            o.to_address().unwrap().street(),
            Some(&AttrValue::from("1 Main St"))
        );
    }

    #[test]
    fn nested_object_absent_is_none() {
        let o = order(json!({"to_address": {}}));
        assert!(o.to_address().is_none());
        assert!(!o.has_to_address());
    }

    #[test]
    fn nested_object_predicate_ignores_shape() {
        // A string can't become an Address, but it is still present
        let o = order(json!({"to_address": "nowhere"}));
        assert!(o.has_to_address());
        assert!(o.to_address().unwrap().street().is_none());
    }

    #[test]
    fn nested_object_values_are_coerced_on_wrap() {
        let o = order(json!({"to_address": {"street": "42"}}));
        assert_eq!(
            o.to_address().unwrap().street(),
            Some(&AttrValue::Int(42))
        );
    }

    #[test]
    fn merge_key_gives_nested_model_the_parent_fields() {
        let o = order(json!({"from_address": {"street": "x"}, "amount": "v"}));
        let from = o.from_address().unwrap();
        assert_eq!(
            from.as_map(),
            AttrValue::from(json!({"origin": {"street": "x"}, "amount": "v"}))
                .as_map()
                .unwrap()
        );
    }

    #[test]
    fn nested_models_inherit_config() {
        let mut fields = Fields::new();
        fields.insert(
            "to_address".into(),
            AttrValue::from(json!({"street": "007"})),
        );
        let o = Order::with_config(fields, ModelConfig::verbatim());
        assert_eq!(
            o.to_address().unwrap().street(),
            Some(&AttrValue::from("007"))
        );
    }

    #[test]
    fn collection_preserves_order() {
        let o = order(json!({"line_items": [{"street": "a"}, {"street": "b"}]}));
        let streets: Vec<_> = o
            .line_items()
            .iter()
            .map(|a| a.street().and_then(AttrValue::as_str).unwrap().to_string())
            .collect();
        assert_eq!(streets, vec!["a", "b"]);
        assert!(std::ptr::eq(o.line_items(), o.line_items()));
    }

    #[test]
    fn map_collection_missing_is_empty() {
        let o = order(json!({}));
        assert!(o.map_collection::<Address>("line_items").is_empty());
        assert!(o.line_items().is_empty());
    }

    #[test]
    fn map_collection_single_map_is_one_element() {
        let o = order(json!({"line_items": {"street": "a"}}));
        assert_eq!(o.map_collection::<Address>("line_items").len(), 1);
    }

    #[test]
    fn lookup_dispatches_by_name() {
        let o = order(json!({"amount": 5, "to_address": {"street": "s"}}));

        let amount = o.lookup("amount").unwrap().unwrap();
        assert_eq!(amount.as_value(), Some(&AttrValue::Int(5)));

        let address = o.lookup("to_address").unwrap().unwrap();
        let address = address.as_object().unwrap();
        assert_eq!(address.model_name(), "Address");
        assert_eq!(
            address.attr("street").unwrap().unwrap().as_value(),
            Some(&AttrValue::from("s"))
        );

        let items = o.lookup("line_items").unwrap().unwrap();
        assert_eq!(items.as_collection().map(<[_]>::len), Some(0));
    }

    #[test]
    fn lookup_absent_is_ok_none() {
        let o = order(json!({"amount": false}));
        assert!(o.lookup("amount").unwrap().is_none());
    }

    #[test]
    fn lookup_unknown_is_error() {
        let o = order(json!({}));
        let err = o.lookup("nope").unwrap_err();
        assert!(matches!(
            err,
            TaxjarError::UnknownAttribute { model: "Order", ref name } if name == "nope"
        ));
    }

    #[test]
    fn spec_reads_schema() {
        assert_eq!(
            Order::spec("from_address").and_then(|s| s.merge),
            Some("origin")
        );
        assert!(Order::spec("nope").is_none());
    }

    #[test]
    fn as_map_shares_the_stored_fields() {
        let o = order(json!({"amount": "10"}));
        assert!(std::ptr::eq(o.as_map(), o.attributes().as_map()));
        assert_eq!(o.as_map()["amount"], AttrValue::Int(10));
        assert_eq!(o.to_json(), json!({"amount": 10}));
    }

    #[test]
    fn from_json_rejects_malformed_body() {
        assert!(matches!(
            Order::from_json("{\"amount\":"),
            Err(TaxjarError::Json(_))
        ));
        assert!(Order::from_json("[1, 2]").unwrap().as_map().is_empty());
    }

    // Deprecated bracket accessor

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<String>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Captured {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            struct Message<'a>(&'a mut String);

            impl tracing::field::Visit for Message<'_> {
                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.0.push_str(&format!("{:?}", value));
                    }
                }
            }

            let mut message = String::new();
            event.record(&mut Message(&mut message));
            self.0.lock().unwrap().push(message);
        }
    }

    fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
        use tracing_subscriber::layer::SubscriberExt;

        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());
        let result = tracing::subscriber::with_default(subscriber, f);
        let messages = captured.0.lock().unwrap().clone();
        (result, messages)
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_get_unknown_is_none_and_warns() {
        let o = order(json!({"amount": 1}));
        let (found, messages) = capture(|| o.get("nope").is_none());

        assert!(found);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("[DEPRECATION]"));
        assert!(messages[0].contains("\"nope\""));
        // The warning points at this file, not at the trait
        assert!(messages[0].contains(file!()));
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_get_known_returns_value_and_warns_every_call() {
        let o = order(json!({"amount": 1}));
        let (values, messages) = capture(|| {
            let first = o.get("amount").and_then(|l| l.as_value().cloned());
            let second = o.get("amount").and_then(|l| l.as_value().cloned());
            (first, second)
        });

        assert_eq!(values, (Some(AttrValue::Int(1)), Some(AttrValue::Int(1))));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_get_warnings_can_be_disabled() {
        let config = ModelConfig {
            deprecation_warnings: false,
            ..Default::default()
        };
        let o = Order::with_config(Fields::new(), config);
        let (_, messages) = capture(|| o.get("amount").is_none());
        assert!(messages.is_empty());
    }
}
