use std::fs;

use serde_json::Value as JsonValue;
use vardata_path::{lookup, KeyPath, PathLookup, TreeNode};
use vardata_value::{NumberKind, NumberLocale, ParseNumberError, Value};

use crate::{JsonFileError, JsonFileErrorKind};

/// A parsed JSON file serving repeated dotted-path reads.
///
/// The file is parsed once on open; every read walks the in-memory tree.
/// All resources are released on drop.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    file_name: String,
    root: JsonValue,
    locale: NumberLocale,
}

impl JsonDocument {
    /// Parse the named JSON file.
    ///
    /// If `verbose` is set, an informational loading event is emitted.
    /// Returns an error naming the file if it cannot be read, and the
    /// parser's line/column if it cannot be parsed.
    pub fn parse_file(file_name: &str, verbose: bool) -> Result<Self, JsonFileError> {
        if verbose {
            tracing::info!("loading \"{}\"", file_name);
        }
        let text = fs::read_to_string(file_name)
            .map_err(|error| JsonFileError::read(file_name, error))?;
        let root: JsonValue =
            serde_json::from_str(&text).map_err(|error| JsonFileError::parse(file_name, &error))?;
        Ok(Self {
            file_name: file_name.to_string(),
            root,
            locale: NumberLocale::default(),
        })
    }

    /// Build a document from an already parsed tree.
    ///
    /// `file_name` is only used in diagnostics.
    pub fn from_root(file_name: &str, root: JsonValue) -> Self {
        Self {
            file_name: file_name.to_string(),
            root,
            locale: NumberLocale::default(),
        }
    }

    /// The name of the underlying file.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The locale used for string-to-number conversion.
    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    /// Set the locale used for string-to-number conversion.
    pub fn set_locale(&mut self, locale: NumberLocale) {
        self.locale = locale;
    }

    /// Read a float at the given dotted path.
    ///
    /// Returns `Ok(None)` if the path does not exist. A value that exists but
    /// is not a number, or a string token that does not parse as a float
    /// under the document's locale, is an error.
    pub fn read_f64(&self, path: &str) -> Result<Option<f64>, JsonFileError> {
        let node = match self.find(path) {
            Some(node) => node,
            None => return Ok(None),
        };
        match node {
            JsonValue::Number(n) => Ok(n.as_f64()),
            JsonValue::String(token) => self
                .locale
                .parse_f64(token)
                .map(Some)
                .map_err(|error| self.number_error(path, error)),
            _ => Err(self.type_error(path, "double", node)),
        }
    }

    /// Read an integer at the given dotted path.
    ///
    /// Returns `Ok(None)` if the path does not exist. Non-integral numbers
    /// and non-numeric tokens are errors.
    pub fn read_i64(&self, path: &str) -> Result<Option<i64>, JsonFileError> {
        let node = match self.find(path) {
            Some(node) => node,
            None => return Ok(None),
        };
        match node {
            JsonValue::Number(n) => match n.as_i64() {
                Some(value) => Ok(Some(value)),
                None => Err(self.number_error(
                    path,
                    ParseNumberError {
                        kind: NumberKind::Int,
                        token: n.to_string(),
                    },
                )),
            },
            JsonValue::String(token) => self
                .locale
                .parse_i64(token)
                .map(Some)
                .map_err(|error| self.number_error(path, error)),
            _ => Err(self.type_error(path, "int", node)),
        }
    }

    /// Read a string at the given dotted path.
    ///
    /// Returns `Ok(None)` if the path does not exist. Numbers and booleans
    /// are returned in their textual form; arrays and null are errors. A
    /// path naming an object is reported as absent, since an object is
    /// never a terminal field.
    pub fn read_string(&self, path: &str) -> Result<Option<String>, JsonFileError> {
        let node = match self.find(path) {
            Some(node) => node,
            None => return Ok(None),
        };
        match node {
            JsonValue::String(s) => Ok(Some(s.clone())),
            JsonValue::Number(n) => Ok(Some(n.to_string())),
            JsonValue::Bool(b) => Ok(Some(b.to_string())),
            _ => Err(self.type_error(path, "string", node)),
        }
    }

    /// Read a scalar of whatever type is stored at the given dotted path.
    pub fn read_value(&self, path: &str) -> Result<Option<Value>, JsonFileError> {
        let node = match self.find(path) {
            Some(node) => node,
            None => return Ok(None),
        };
        let value = match node {
            JsonValue::Number(n) => match n.as_i64() {
                Some(value) => Value::Int(value),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::Str(s.clone()),
            JsonValue::Bool(b) => Value::Str(b.to_string()),
            _ => return Err(self.type_error(path, "scalar", node)),
        };
        Ok(Some(value))
    }

    /// Walk a dotted path through the tree.
    ///
    /// Any kind of miss, including a malformed path, yields `None` with an
    /// advisory event; only coercion of a found value can fail loudly.
    fn find(&self, path: &str) -> Option<&JsonValue> {
        let key_path = match KeyPath::parse(path) {
            Ok(key_path) => key_path,
            Err(error) => {
                tracing::warn!(
                    "cannot read element \"{}\" from file \"{}\": {}",
                    path,
                    self.file_name,
                    error
                );
                return None;
            }
        };
        match lookup(JsonNode(&self.root), &key_path) {
            PathLookup::Found(node) => Some(node.0),
            PathLookup::MissingField => {
                tracing::warn!(
                    "cannot read element \"{}\" from file \"{}\"",
                    path,
                    self.file_name
                );
                None
            }
            PathLookup::MissingPath => {
                tracing::warn!(
                    "cannot resolve element path \"{}\" in file \"{}\"",
                    path,
                    self.file_name
                );
                None
            }
        }
    }

    fn number_error(&self, path: &str, error: ParseNumberError) -> JsonFileError {
        JsonFileError {
            file_name: self.file_name.clone(),
            kind: JsonFileErrorKind::NumberFormat {
                path: path.to_string(),
                error,
            },
        }
    }

    fn type_error(&self, path: &str, expected: &'static str, node: &JsonValue) -> JsonFileError {
        JsonFileError {
            file_name: self.file_name.clone(),
            kind: JsonFileErrorKind::WrongType {
                path: path.to_string(),
                expected,
                found: describe(node).to_string(),
            },
        }
    }
}

/// Cursor into a parsed JSON tree, so the generic walk can be implemented
/// for a foreign node type.
#[derive(Debug, Clone, Copy)]
struct JsonNode<'a>(&'a JsonValue);

impl<'a> TreeNode for JsonNode<'a> {
    fn child_container(self, name: &str) -> Option<Self> {
        self.child_value(name).filter(|child| child.0.is_object())
    }

    fn child_value(self, name: &str) -> Option<Self> {
        self.0
            .as_object()
            .and_then(|object| object.get(name))
            .map(JsonNode)
    }
}

fn describe(node: &JsonValue) -> &'static str {
    match node {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vardata_value::NumberLocale;

    use super::*;

    fn document(root: JsonValue) -> JsonDocument {
        JsonDocument::from_root("test.json", root)
    }

    #[test]
    fn nested_float_is_found() {
        let doc = document(json!({"a": {"b": {"c": 42}}}));
        assert_eq!(doc.read_f64("a.b.c").unwrap(), Some(42.0));
        assert_eq!(doc.read_i64("a.b.c").unwrap(), Some(42));
    }

    #[test]
    fn missing_container_is_advisory() {
        let doc = document(json!({"a": {"b": {"c": 42}}}));
        assert_eq!(doc.read_f64("a.x.c").unwrap(), None);
        assert_eq!(doc.read_string("a.x.c").unwrap(), None);
    }

    #[test]
    fn missing_field_is_advisory() {
        let doc = document(json!({"a": {"b": {"c": 42}}}));
        assert_eq!(doc.read_f64("a.b.d").unwrap(), None);
    }

    #[test]
    fn path_naming_a_container_is_advisory() {
        let doc = document(json!({"a": {"b": {"c": 42}}}));
        assert_eq!(doc.read_f64("a.b").unwrap(), None);
    }

    #[test]
    fn non_numeric_value_is_fatal() {
        let doc = document(json!({"a": "hello"}));
        assert!(doc.read_f64("a").is_err());
        assert!(doc.read_i64("a").is_err());
        assert_eq!(doc.read_string("a").unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn array_value_is_fatal_for_scalar_reads() {
        let doc = document(json!({"a": [1, 2, 3]}));
        assert!(doc.read_string("a").is_err());
        assert!(doc.read_f64("a").is_err());
        assert!(doc.read_value("a").is_err());
    }

    #[test]
    fn null_value_is_fatal_for_scalar_reads() {
        let doc = document(json!({"a": null}));
        assert!(doc.read_string("a").is_err());
        assert!(doc.read_f64("a").is_err());
    }

    #[test]
    fn numeric_string_tokens_parse() {
        let doc = document(json!({"x": "3.14", "n": "12"}));
        assert_eq!(doc.read_f64("x").unwrap(), Some(3.14));
        assert_eq!(doc.read_i64("n").unwrap(), Some(12));
    }

    #[test]
    fn comma_locale_applies_to_string_tokens() {
        let mut doc = document(json!({"x": "3,14"}));
        assert!(doc.read_f64("x").is_err());
        doc.set_locale(NumberLocale::comma());
        assert_eq!(doc.read_f64("x").unwrap(), Some(3.14));
    }

    #[test]
    fn non_integral_number_is_fatal_for_int_reads() {
        let doc = document(json!({"x": 3.5}));
        assert!(doc.read_i64("x").is_err());
        assert_eq!(doc.read_f64("x").unwrap(), Some(3.5));
    }

    #[test]
    fn malformed_path_is_advisory() {
        let doc = document(json!({"a": 1}));
        assert_eq!(doc.read_f64("").unwrap(), None);
        assert_eq!(doc.read_f64("a..b").unwrap(), None);
    }

    #[test]
    fn scalar_values_keep_their_type() {
        let doc = document(json!({"f": 1.5, "i": 2, "s": "x"}));
        assert_eq!(doc.read_value("f").unwrap(), Some(Value::Float(1.5)));
        assert_eq!(doc.read_value("i").unwrap(), Some(Value::Int(2)));
        assert_eq!(doc.read_value("s").unwrap(), Some(Value::Str("x".to_string())));
    }
}
