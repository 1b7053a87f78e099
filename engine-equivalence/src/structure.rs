//! Structural checks of a decoded block against the raw json object it came from.

use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use crate::error::{Divergence, SchemaError, StructureError};
use crate::model::{FieldRule, WireFields};

/// True when every declared non flattened field has its wire key in `json_map`.
pub fn json_fields_are_valid<T: WireFields>(
    json_map: &Map<String, Value>,
) -> Result<bool, SchemaError> {
    for field in T::Field::iter() {
        if T::rule(field) == FieldRule::Flattened {
            continue;
        }
        let wire_name = wire_name::<T>(field)?;
        if !json_map.contains_key(wire_name) {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Checks that every declared field of `block` matches its raw wire value.
///
/// Flattened fields are skipped, nested fields only need to be present and
/// hash fields are compared after passing the raw value through the client
/// hash codec.
pub fn validate_block_consistency<T: WireFields>(
    block: &T,
    json_map: &Map<String, Value>,
) -> Result<(), StructureError> {
    for field in T::Field::iter() {
        let rule = T::rule(field);
        if rule == FieldRule::Flattened {
            continue;
        }
        let name: &'static str = field.into();
        let wire_name = wire_name::<T>(field)?;
        let raw = json_map.get(wire_name).ok_or(Divergence::MissingWireKey {
            field: name,
            wire_name,
        })?;

        let expected = match rule {
            FieldRule::Flattened | FieldRule::Nested => continue,
            FieldRule::Hash => canonical_hash(raw),
            FieldRule::Raw => Some(raw.clone()),
        };
        let decoded = block
            .field_value(field)
            .unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")));

        if expected.as_ref() != Some(&decoded) {
            return Err(Divergence::FieldMismatch {
                field: name,
                raw: raw.to_string(),
                decoded: decoded.to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn wire_name<T: WireFields>(field: T::Field) -> Result<&'static str, SchemaError> {
    T::wire_name(field).ok_or_else(|| SchemaError::MissingWireName {
        field: field.into(),
    })
}

fn canonical_hash(raw: &Value) -> Option<Value> {
    let hash: engine_format::Hash = serde_json::from_value(raw.clone()).ok()?;
    serde_json::to_value(hash).ok()
}
