//! Response body types and content negotiation helpers.
//!
//! The REST API can render most responses as JSON, XML or plain text, and
//! a few (cluster maps) only as an opaque binary blob. [`BodyType`] names
//! the representation; [`ResponseBody`] carries the decoded payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Body types accepted when the caller and endpoint express no preference.
pub const DEFAULT_SUPPORTED_BODY_TYPES: &[BodyType] =
    &[BodyType::Json, BodyType::Text, BodyType::Xml];

/// A response body representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Json,
    Text,
    Xml,
    Binary,
}

impl BodyType {
    /// Lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BodyType::Json => "json",
            BodyType::Text => "text",
            BodyType::Xml => "xml",
            BodyType::Binary => "binary",
        }
    }

    /// MIME type sent in the `Accept` header.
    pub const fn mime_type(&self) -> &'static str {
        match self {
            BodyType::Json => "application/json",
            BodyType::Text => "text/plain",
            BodyType::Xml => "application/xml",
            BodyType::Binary => "application/octet-stream",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(BodyType::Json),
            "text" => Ok(BodyType::Text),
            "xml" => Ok(BodyType::Xml),
            "binary" => Ok(BodyType::Binary),
            other => Err(format!("unknown body type: {other}")),
        }
    }
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
    Xml(String),
    Binary(Vec<u8>),
}

impl ResponseBody {
    /// The representation this body was decoded as.
    pub fn body_type(&self) -> BodyType {
        match self {
            ResponseBody::Json(_) => BodyType::Json,
            ResponseBody::Text(_) => BodyType::Text,
            ResponseBody::Xml(_) => BodyType::Xml,
            ResponseBody::Binary(_) => BodyType::Binary,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Text of a text or XML body.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) | ResponseBody::Xml(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ResponseBody::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(BodyType::Json.mime_type(), "application/json");
        assert_eq!(BodyType::Text.mime_type(), "text/plain");
        assert_eq!(BodyType::Xml.mime_type(), "application/xml");
        assert_eq!(BodyType::Binary.mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_parse_body_type() {
        assert_eq!("JSON".parse::<BodyType>().unwrap(), BodyType::Json);
        assert_eq!(" binary ".parse::<BodyType>().unwrap(), BodyType::Binary);
        assert!("yaml".parse::<BodyType>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        let json = serde_json::to_string(&[BodyType::Text, BodyType::Xml]).unwrap();
        assert_eq!(json, r#"["text","xml"]"#);
    }

    #[test]
    fn test_default_supported_set_excludes_binary() {
        assert!(!DEFAULT_SUPPORTED_BODY_TYPES.contains(&BodyType::Binary));
        assert_eq!(DEFAULT_SUPPORTED_BODY_TYPES[0], BodyType::Json);
    }

    #[test]
    fn test_response_body_accessors() {
        let xml = ResponseBody::Xml("<status/>".to_string());
        assert_eq!(xml.as_text(), Some("<status/>"));
        assert_eq!(xml.body_type(), BodyType::Xml);
        assert!(xml.as_json().is_none());

        let bin = ResponseBody::Binary(vec![0x01, 0x02]);
        assert_eq!(bin.as_bytes(), Some(&[0x01, 0x02][..]));
        assert!(bin.as_text().is_none());
    }
}
