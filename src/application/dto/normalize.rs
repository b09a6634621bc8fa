//! Body Normalization
//!
//! Clients may send place `amenities` as a JSON array and `coordinates` as a
//! JSON object. The store keeps both as encoded text, so structured values
//! are re-encoded before the body is validated. Values that are already
//! strings pass through untouched.

use serde_json::Value;

/// Re-encode structured `amenities` / `coordinates` into their text form.
pub fn normalize_place_body(mut body: Value) -> Value {
    if let Some(fields) = body.as_object_mut() {
        for key in ["amenities", "coordinates"] {
            if let Some(value) = fields.get_mut(key) {
                if value.is_array() || value.is_object() {
                    *value = Value::String(value.to_string());
                }
            }
        }
    }
    body
}
