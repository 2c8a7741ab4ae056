//! Tests for the built-in processors
//!
//! Recognition and coercion are tested on the processors directly; option
//! handling is tested through a [`FieldContext`] built by hand.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::types::RawInput;
    use crate::{Error, GeoBox, ObjectId};
    use chrono::{Datelike, NaiveDate, Timelike};
    use serde_json::{json, Value};

    fn check_with<P: Processor>(processor: &P, raw: Value, options: Options) -> Vec<ErrorRecord> {
        let datas = RawInput::new();
        let field = FieldContext {
            key: "field",
            raw: &raw,
            options: &options,
            datas: &datas,
        };
        processor.check(&field).unwrap()
    }

    #[test]
    fn test_any_accepts_everything() {
        for raw in [json!(null), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
            assert!(AnyProcessor.recognize(&raw));
            assert_eq!(AnyProcessor.coerce(&raw).unwrap(), FieldValue::Raw(raw.clone()));
        }
    }

    #[test]
    fn test_boolean_recognition() {
        assert!(BooleanProcessor.recognize(&json!("true")));
        assert!(BooleanProcessor.recognize(&json!("false")));
        assert!(BooleanProcessor.recognize(&json!(true)));
        assert!(!BooleanProcessor.recognize(&json!("yes")));
        assert!(!BooleanProcessor.recognize(&json!("untrue")));
        assert!(!BooleanProcessor.recognize(&json!(1)));
    }

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(BooleanProcessor.coerce(&json!("true")).unwrap(), FieldValue::Boolean(true));
        assert_eq!(BooleanProcessor.coerce(&json!("false")).unwrap(), FieldValue::Boolean(false));
        assert_eq!(BooleanProcessor.coerce(&json!(false)).unwrap(), FieldValue::Boolean(false));
    }

    #[test]
    fn test_text_recognition() {
        assert!(TextProcessor.recognize(&json!("")));
        assert!(TextProcessor.recognize(&json!("styx")));
        assert!(!TextProcessor.recognize(&json!(12)));
        assert!(!TextProcessor.recognize(&json!(null)));
    }

    #[test]
    fn test_text_regex_is_unanchored() {
        let errors = check_with(&TextProcessor, json!("the river styx"), Options::new().regex("styx"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email() {
        assert!(EmailProcessor.recognize(&json!("charon@styx.gr")));
        assert!(EmailProcessor.recognize(&json!("first.last+tag@sub.domain.com")));
        assert!(!EmailProcessor.recognize(&json!("charon@styx")));
        assert!(!EmailProcessor.recognize(&json!("not an email")));
        assert_eq!(
            EmailProcessor.coerce(&json!("charon@styx.gr")).unwrap(),
            FieldValue::Text("charon@styx.gr".to_string())
        );
    }

    #[test]
    fn test_integer_recognition() {
        assert!(IntegerProcessor.recognize(&json!("1000")));
        assert!(IntegerProcessor.recognize(&json!(0)));
        assert!(!IntegerProcessor.recognize(&json!("-3")));
        assert!(!IntegerProcessor.recognize(&json!("1.5")));
        assert!(!IntegerProcessor.recognize(&json!("12a")));
        assert!(!IntegerProcessor.recognize(&json!("99999999999999999999")));
        assert!(!IntegerProcessor.recognize(&json!([1])));
    }

    #[test]
    fn test_integer_native_json_numbers() {
        assert_eq!(IntegerProcessor.coerce(&json!(42)).unwrap(), FieldValue::Integer(42));
        assert!(!IntegerProcessor.recognize(&json!(-3)));
        assert!(!IntegerProcessor.recognize(&json!(1.5)));
        assert!(!IntegerProcessor.recognize(&json!(u64::MAX)));
    }

    #[test]
    fn test_numeric_patterns_are_ascii_only() {
        // Arabic-Indic and fullwidth digits
        for rejected in [json!("\u{0661}\u{0662}"), json!("\u{FF11}\u{FF12}"), json!("1,\u{0665}")] {
            assert!(!IntegerProcessor.recognize(&rejected), "{} should not be an integer", rejected);
            assert!(!NumericProcessor.recognize(&rejected), "{} should not be numeric", rejected);
        }
    }

    #[test]
    fn test_numeric_exponent_form_json_numbers() {
        assert!(NumericProcessor.recognize(&json!(1e20)));
        assert_eq!(NumericProcessor.coerce(&json!(1e20)).unwrap(), FieldValue::Float(1e20));
        assert_eq!(NumericProcessor.coerce(&json!(0.0000001)).unwrap(), FieldValue::Float(1e-7));

        let errors = check_with(&NumericProcessor, json!(1e20), Options::new().max(1e19));
        let kinds: Vec<&str> = errors.iter().map(|e| e.kind().as_str()).collect();
        assert_eq!(kinds, vec!["max"]);
    }

    #[test]
    fn test_integer_bounds_check_both_sides() {
        let errors = check_with(&IntegerProcessor, json!("5"), Options::new().min(10.0).max(1.0));
        let kinds: Vec<&str> = errors.iter().map(|e| e.kind().as_str()).collect();
        assert_eq!(kinds, vec!["min", "max"]);
    }

    #[test]
    fn test_numeric_recognition() {
        for accepted in [json!("1000"), json!("1000,5"), json!("-1.25"), json!("+3"), json!(2.5)] {
            assert!(NumericProcessor.recognize(&accepted), "{} should be numeric", accepted);
        }
        for rejected in [json!("1.2.3"), json!(".5"), json!("1,"), json!("abc"), json!(true)] {
            assert!(!NumericProcessor.recognize(&rejected), "{} should not be numeric", rejected);
        }
    }

    #[test]
    fn test_numeric_adjust() {
        let adjusted = NumericProcessor.adjust(FieldValue::Float(2.345), &Options::new().round(1));
        assert_eq!(adjusted, FieldValue::Float(2.3));

        let untouched = NumericProcessor.adjust(FieldValue::Float(2.345), &Options::new());
        assert_eq!(untouched, FieldValue::Float(2.345));
    }

    #[test]
    fn test_date() {
        assert!(DateProcessor.recognize(&json!("2015-12-25")));
        assert!(DateProcessor.recognize(&json!("2015-12-25T10:00:00Z")));
        assert!(!DateProcessor.recognize(&json!("not a date")));
        assert!(!DateProcessor.recognize(&json!("2015-13-45")));

        let coerced = DateProcessor.coerce(&json!("25/12/2015")).unwrap();
        assert_eq!(coerced, FieldValue::Date(NaiveDate::from_ymd_opt(2015, 12, 25).unwrap()));
    }

    #[test]
    fn test_datetime() {
        assert!(DatetimeProcessor.recognize(&json!("2015-12-25T10:30:00+02:00")));
        assert!(!DatetimeProcessor.recognize(&json!("yesterday")));

        match DatetimeProcessor.coerce(&json!("2015-12-25 10:30:00")).unwrap() {
            FieldValue::DateTime(datetime) => {
                assert_eq!(datetime.year(), 2015);
                assert_eq!(datetime.hour(), 10);
                assert_eq!(datetime.offset().local_minus_utc(), 0);
            }
            other => panic!("expected a datetime, got {:?}", other),
        }
    }

    #[test]
    fn test_array_and_hash_recognition() {
        assert!(ArrayProcessor.recognize(&json!([])));
        assert!(!ArrayProcessor.recognize(&json!({"a": 1})));
        assert!(HashProcessor.recognize(&json!({})));
        assert!(!HashProcessor.recognize(&json!("{}")));
    }

    #[test]
    fn test_hash_coercion_keeps_entries() {
        match HashProcessor.coerce(&json!({"b": 2, "a": 1})).unwrap() {
            FieldValue::Hash(map) => {
                assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
            }
            other => panic!("expected a hash, got {:?}", other),
        }
    }

    #[test]
    fn test_hash_reports_keys_and_values() {
        let errors = check_with(
            &HashProcessor,
            json!({"key1": "value1"}),
            Options::new().has_keys(["key2"]).contains(["value2"]),
        );
        let kinds: Vec<&str> = errors.iter().map(|e| e.kind().as_str()).collect();
        assert_eq!(kinds, vec!["contains.keys", "contains.values"]);
    }

    #[test]
    fn test_identifier() {
        let raw = json!("507f1f77bcf86cd799439011");
        assert!(IdentifierProcessor.recognize(&raw));
        assert!(!IdentifierProcessor.recognize(&json!("507f1f77bcf86cd79943901")));
        assert!(!IdentifierProcessor.recognize(&json!("507f1f77bcf86cd79943901z")));

        let expected = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(IdentifierProcessor.coerce(&raw).unwrap(), FieldValue::Identifier(expected));
    }

    #[test]
    fn test_identifier_coercion_failure_is_collaborator_error() {
        let err = IdentifierProcessor.coerce(&json!("zz")).unwrap_err();
        assert!(matches!(err, Error::Collaborator { source: Some(_), .. }));
    }

    #[test]
    fn test_box_recognition() {
        assert!(BoxProcessor.recognize(&json!("-2,-2.0,100,100.0")));
        assert!(BoxProcessor.recognize(&json!("+1.1234567,0,2,3")));
        assert!(!BoxProcessor.recognize(&json!("1,2,3")));
        assert!(!BoxProcessor.recognize(&json!("1000,2,3,4")));
        assert!(!BoxProcessor.recognize(&json!("1.12345678,2,3,4")));
        assert!(!BoxProcessor.recognize(&json!([[1, 2], [3, 4]])));
    }

    #[test]
    fn test_box_rejects_non_ascii_digits() {
        assert!(!BoxProcessor.recognize(&json!("\u{0661},\u{0662},\u{0663},\u{0664}")));
        assert!(!BoxProcessor.recognize(&json!("1,2,3,\u{0664}")));
    }

    #[test]
    fn test_box_options_accept_nested_pairs() {
        let errors = check_with(
            &BoxProcessor,
            json!("0,0,10,10"),
            Options::new().at_most(json!([[-1, -1], [11, 11]])),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_box_at_least_compares_every_corner() {
        // Only the top coordinate of the validated box sticks out
        let errors = check_with(&BoxProcessor, json!("0,5,10,10"), Options::new().at_least("0,0,10,10"));
        assert_eq!(
            errors,
            vec![ErrorRecord::BoxContainment {
                key: "field".to_string(),
                container: GeoBox([0.0, 5.0], [10.0, 10.0]),
                contained: GeoBox([0.0, 0.0], [10.0, 10.0]),
            }]
        );
    }

    #[test]
    fn test_box_at_most_compares_every_corner() {
        let errors = check_with(&BoxProcessor, json!("0,0,12,10"), Options::new().at_most("0,0,10,10"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind().as_str(), "box.containment");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ProcessorRegistry::new();
        assert_eq!(registry.lookup("integer").unwrap().type_name(), "Integer");
        assert_eq!(registry.lookup("ssid").unwrap().type_name(), "ObjectId");
        assert!(matches!(
            registry.lookup("uuid"),
            Err(Error::UnknownProcessor { .. })
        ));
    }

    #[test]
    fn test_registry_register_and_remove() {
        let mut registry = ProcessorRegistry::empty();
        assert!(registry.is_empty());

        registry.register("flag", std::sync::Arc::new(BooleanProcessor));
        registry.register("flag", std::sync::Arc::new(TextProcessor));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("flag").unwrap().type_name(), "String");

        assert!(registry.remove("flag").is_some());
        assert!(!registry.contains("flag"));
        assert!(registry.remove("flag").is_none());
    }

    #[test]
    fn test_registry_names_sorted() {
        let names = ProcessorRegistry::new().names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 13);
    }
}
