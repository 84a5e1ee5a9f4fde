//! Bundled JSON Schemas for the e-commerce tracking plan
//!
//! This file is generated from the tracking plan. Do not edit by hand;
//! regenerate it when the plan changes.
//!
//! Schemas are embedded at compile time and parsed lazily on first use. The
//! whole table (and this module) exists only in `validation` builds, keeping
//! production binaries free of schema weight.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::warn;

/// Event name → authored schema for every event in the plan.
static SCHEMAS: Lazy<HashMap<&'static str, Value>> = Lazy::new(|| {
    let mut schemas = HashMap::new();
    for (event, raw) in [
        ("Cart Viewed", include_str!("../schemas/cart_viewed.json")),
        ("Order Completed", include_str!("../schemas/order_completed.json")),
        ("Product Viewed", include_str!("../schemas/product_viewed.json")),
        ("User Signed Up", include_str!("../schemas/user_signed_up.json")),
    ] {
        match serde_json::from_str(raw) {
            Ok(schema) => {
                schemas.insert(event, schema);
            }
            Err(error) => {
                // A bundled schema that does not parse is a generator bug;
                // skip it rather than fail every dispatch of the event.
                warn!(event = %event, error = %error, "bundled schema is not valid JSON, skipping");
            }
        }
    }
    schemas
});

/// Look up the authored schema for `event`, if the plan defines one.
pub fn schema_for(event: &str) -> Option<&'static Value> {
    SCHEMAS.get(event)
}
