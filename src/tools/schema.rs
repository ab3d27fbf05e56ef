use serde_json::{json, Map, Value};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Url,
    Integer,
    Boolean,
    StringList,
    UrlList,
    Object,
}

#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
    pub default: Option<Value>,
    /// Minimum value for `Integer`, minimum length for list kinds.
    pub minimum: Option<u64>,
}

impl ParamSpec {
    pub fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
            default: None,
            minimum: None,
        }
    }

    pub fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
            default: None,
            minimum: None,
        }
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_minimum(mut self, minimum: u64) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

/// Declared parameter surface of one tool, validated by a single shared
/// routine before any adapter or network call runs.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    params: Vec<ParamSpec>,
}

impl ToolSchema {
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    /// The JSON-Schema-shaped `parameters` value advertised in a
    /// `ToolDefinition`.
    pub fn to_parameters(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for spec in &self.params {
            let mut prop = match spec.kind {
                ParamKind::String | ParamKind::Url => json!({ "type": "string" }),
                ParamKind::Integer => json!({ "type": "integer" }),
                ParamKind::Boolean => json!({ "type": "boolean" }),
                ParamKind::StringList | ParamKind::UrlList => {
                    json!({ "type": "array", "items": { "type": "string" } })
                }
                ParamKind::Object => json!({ "type": "object" }),
            };
            if !spec.description.is_empty() {
                prop["description"] = Value::String(spec.description.to_string());
            }
            if let (ParamKind::Integer, Some(minimum)) = (spec.kind, spec.minimum) {
                prop["minimum"] = json!(minimum);
            }
            if let Some(default) = &spec.default {
                prop["default"] = default.clone();
            }
            properties.insert(spec.name.to_string(), prop);
            if spec.required {
                required.push(Value::String(spec.name.to_string()));
            }
        }
        json!({
            "type": "object",
            "properties": Value::Object(properties),
            "required": Value::Array(required)
        })
    }

    /// Checks `args` against the declared specs and returns a normalized
    /// argument object: declared keys only, defaults filled in. Undeclared
    /// keys are ignored.
    pub fn validate(&self, args: &Value) -> Result<Value, Error> {
        let object = match args {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            _ => {
                return Err(Error::InvalidParams(
                    "arguments must be a JSON object".to_string(),
                ))
            }
        };

        let mut normalized = Map::new();
        for spec in &self.params {
            let value = match object.get(spec.name) {
                Some(Value::Null) | None => {
                    if spec.required {
                        return Err(Error::InvalidParams(format!("Missing {}", spec.name)));
                    }
                    if let Some(default) = &spec.default {
                        normalized.insert(spec.name.to_string(), default.clone());
                    }
                    continue;
                }
                Some(value) => value,
            };
            check_kind(spec, value)?;
            normalized.insert(spec.name.to_string(), value.clone());
        }
        Ok(Value::Object(normalized))
    }
}

fn check_kind(spec: &ParamSpec, value: &Value) -> Result<(), Error> {
    match spec.kind {
        ParamKind::String => {
            value.as_str().ok_or_else(|| expected(spec, "a string"))?;
        }
        ParamKind::Url => {
            let raw = value.as_str().ok_or_else(|| expected(spec, "a string"))?;
            check_url(spec.name, raw)?;
        }
        ParamKind::Integer => {
            let n = value.as_u64().ok_or_else(|| expected(spec, "an integer"))?;
            if let Some(minimum) = spec.minimum {
                if n < minimum {
                    return Err(Error::InvalidParams(format!(
                        "'{}' must be at least {minimum}",
                        spec.name
                    )));
                }
            }
        }
        ParamKind::Boolean => {
            value.as_bool().ok_or_else(|| expected(spec, "a boolean"))?;
        }
        ParamKind::StringList | ParamKind::UrlList => {
            let items = value
                .as_array()
                .ok_or_else(|| expected(spec, "an array of strings"))?;
            let min_len = spec.minimum.unwrap_or(0) as usize;
            if items.len() < min_len {
                return Err(Error::InvalidParams(format!(
                    "'{}' must contain at least {min_len} item(s)",
                    spec.name
                )));
            }
            for item in items {
                let raw = item
                    .as_str()
                    .ok_or_else(|| expected(spec, "an array of strings"))?;
                if spec.kind == ParamKind::UrlList {
                    check_url(spec.name, raw)?;
                }
            }
        }
        ParamKind::Object => {
            if !value.is_object() {
                return Err(expected(spec, "an object"));
            }
        }
    }
    Ok(())
}

fn check_url(name: &str, raw: &str) -> Result<(), Error> {
    url::Url::parse(raw)
        .map_err(|_| Error::InvalidParams(format!("'{name}' is not a valid URL: {raw}")))?;
    Ok(())
}

fn expected(spec: &ParamSpec, what: &str) -> Error {
    Error::InvalidParams(format!("Expected '{}' to be {what}", spec.name))
}

pub fn as_str(args: &Value, key: &str) -> Option<String> {
    args.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

pub fn as_bool(args: &Value, key: &str) -> Option<bool> {
    args.get(key).and_then(|v| v.as_bool())
}

pub fn as_u64(args: &Value, key: &str) -> Option<u64> {
    args.get(key).and_then(|v| v.as_u64())
}

pub fn as_str_list(args: &Value, key: &str) -> Option<Vec<String>> {
    args.get(key).and_then(|v| v.as_array()).map(|items| {
        items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.to_string())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            ParamSpec::required("url", ParamKind::Url, "Page to fetch."),
            ParamSpec::optional("limit", ParamKind::Integer, "Result cap.")
                .with_default(json!(5))
                .with_minimum(1),
            ParamSpec::optional("only_main_content", ParamKind::Boolean, ""),
            ParamSpec::optional("formats", ParamKind::StringList, ""),
        ])
    }

    #[test]
    fn missing_required_param_is_rejected() {
        let err = schema().validate(&json!({ "limit": 3 })).unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = schema()
            .validate(&json!({ "url": "https://example.com", "limit": "five" }))
            .unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn below_minimum_is_rejected() {
        let err = schema()
            .validate(&json!({ "url": "https://example.com", "limit": 0 }))
            .unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = schema().validate(&json!({ "url": "not a url" })).unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn defaults_are_applied_and_unknown_keys_dropped() {
        let normalized = schema()
            .validate(&json!({ "url": "https://example.com", "surprise": true }))
            .unwrap();
        assert_eq!(normalized["limit"], json!(5));
        assert_eq!(normalized["url"], json!("https://example.com"));
        assert!(normalized.get("surprise").is_none());
    }

    #[test]
    fn list_items_are_type_checked() {
        let err = schema()
            .validate(&json!({ "url": "https://example.com", "formats": ["markdown", 7] }))
            .unwrap_err();
        assert!(err.to_string().contains("formats"));
    }

    #[test]
    fn url_list_minimum_length_is_enforced() {
        let urls = ToolSchema::new(vec![ParamSpec::required(
            "urls",
            ParamKind::UrlList,
            "Pages to extract from.",
        )
        .with_minimum(1)]);
        let err = urls.validate(&json!({ "urls": [] })).unwrap_err();
        assert!(err.to_string().contains("at least 1 item"));
    }

    #[test]
    fn parameters_shape_matches_declared_specs() {
        let params = schema().to_parameters();
        assert_eq!(params["type"], "object");
        assert_eq!(params["properties"]["limit"]["type"], "integer");
        assert_eq!(params["properties"]["limit"]["minimum"], json!(1));
        assert_eq!(params["required"], json!(["url"]));
    }
}
