//! Decoding of meta-block bytes into a key/value mapping.
//!
//! JSON and YAML are the supported languages. When the block declares no
//! language, JSON is tried first: it fails fast on anything that is not
//! JSON, whereas YAML would happily read malformed JSON as a scalar.

use std::collections::BTreeMap;

use crate::error::MetaError;

/// The decoded metadata mapping. YAML values serve as the common value
/// type for both languages; JSON decodes into the same representation.
pub type MetaMap = BTreeMap<String, serde_yaml::Value>;

/// Decode a meta block's body under its declared language, guessing
/// between JSON and YAML when the language is undeclared.
///
/// An empty (or whitespace-only) body yields an empty map: that is the
/// ordinary "no meta block found" case, not an error.
pub fn decode(body: &str, lang: &str) -> Result<MetaMap, MetaError> {
    if body.trim().is_empty() {
        return Ok(MetaMap::new());
    }

    if lang.is_empty() {
        if let Ok(map) = serde_json::from_str(body) {
            return Ok(map);
        }
        return serde_yaml::from_str(body).map_err(MetaError::Yaml);
    }

    match lang {
        "json" => serde_json::from_str(body).map_err(MetaError::Json),
        "yaml" => serde_yaml::from_str(body).map_err(MetaError::Yaml),
        other => Err(MetaError::UnsupportedLanguage(other.to_string())),
    }
}
