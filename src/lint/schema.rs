//! JSON Schema generation for logging documents.
//!
//! This module generates a JSON Schema (Draft-07) for `log_config.yaml`,
//! enabling IDE autocomplete and validation.

use serde_json::{json, Value};

use crate::logconf::schema::{HandlerClass, LEVEL_NAMES, SUPPORTED_VERSION};
use crate::logconf::RECORD_FIELDS;

/// Generates JSON Schema for logging documents.
#[derive(Debug, Default)]
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for log_config.yaml.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Logging Configuration",
            "description": "Formatters, handlers and named loggers",
            "type": "object",
            "properties": {
                "version": {
                    "type": "integer",
                    "const": SUPPORTED_VERSION,
                    "default": SUPPORTED_VERSION
                },
                "disable_existing_loggers": {
                    "type": ["boolean", "string"],
                    "default": true,
                    "description": "Disable loggers not named in this document"
                },
                "formatters": {
                    "type": "object",
                    "additionalProperties": self.formatter_schema()
                },
                "handlers": {
                    "type": "object",
                    "additionalProperties": self.handler_schema()
                },
                "loggers": {
                    "type": "object",
                    "additionalProperties": self.logger_schema()
                },
                "root": self.logger_schema()
            }
        })
    }

    fn formatter_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "format": {
                    "type": "string",
                    "default": "%(message)s",
                    "description": format!(
                        "Record template; fields: {}",
                        RECORD_FIELDS.join(", ")
                    )
                },
                "datefmt": {
                    "type": "string",
                    "description": "strftime pattern for %(asctime)s"
                }
            }
        })
    }

    fn handler_schema(&self) -> Value {
        let classes: Vec<&str> = HandlerClass::ALL
            .into_iter()
            .map(HandlerClass::class_name)
            .collect();

        json!({
            "type": "object",
            "required": ["class"],
            "properties": {
                "class": { "type": "string", "enum": classes },
                "formatter": {
                    "type": "string",
                    "description": "Name of a formatter defined under 'formatters'"
                },
                "level": self.level_schema(),
                "delay": { "type": ["boolean", "string"] },
                "filename": { "type": "string" },
                "stream": {
                    "type": "string",
                    "enum": ["ext://sys.stdout", "ext://sys.stderr"]
                },
                "encoding": { "type": "string" },
                "mode": { "type": "string", "default": "a" },
                "maxBytes": { "type": "integer", "minimum": 0 },
                "backupCount": { "type": "integer", "minimum": 0 }
            }
        })
    }

    fn logger_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "level": self.level_schema(),
                "handlers": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Names of handlers defined under 'handlers'"
                },
                "propagate": {
                    "type": ["boolean", "string"],
                    "default": true
                }
            }
        })
    }

    fn level_schema(&self) -> Value {
        let names: Vec<&str> = LEVEL_NAMES.iter().map(|(name, _)| *name).collect();
        json!({
            "oneOf": [
                { "type": "integer", "minimum": 0 },
                { "type": "string", "enum": names }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_valid_json() {
        let schema = SchemaGenerator::new().generate();
        assert!(schema.is_object());
        assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
        assert_eq!(schema["properties"]["version"]["const"], 1);
    }

    #[test]
    fn handler_classes_are_enumerated() {
        let schema = SchemaGenerator::new().generate();
        let classes = &schema["properties"]["handlers"]["additionalProperties"]["properties"]
            ["class"]["enum"];
        assert_eq!(classes.as_array().unwrap().len(), 3);
        assert_eq!(classes[2], "logging.handlers.RotatingFileHandler");
    }

    #[test]
    fn level_accepts_numbers_and_names() {
        let schema = SchemaGenerator::new().generate();
        let level = &schema["properties"]["loggers"]["additionalProperties"]["properties"]["level"];
        assert_eq!(level["oneOf"][0]["type"], "integer");
        assert!(level["oneOf"][1]["enum"]
            .as_array()
            .unwrap()
            .contains(&Value::from("DEBUG")));
    }

    #[test]
    fn schema_serializes_to_string() {
        let json_str = serde_json::to_string_pretty(&SchemaGenerator::new().generate()).unwrap();
        assert!(json_str.contains("maxBytes"));
    }
}
