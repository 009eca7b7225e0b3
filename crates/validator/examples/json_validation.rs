//! Validating decoded JSON payloads with schemata-validator

use schemata_validator::json::validate_json;
use schemata_validator::prelude::*;
use schemata_validator::schema;
use serde_json::json;

fn main() {
    let schema = schema! {
        "age" => int64().gte(0).lte(150),
        "email" => string().email(),
        "address" => schema! {
            "zip" => string().min(5).max(5),
            "country" => string().one_of(["DE", "FR", "GB"]),
        }
        .optional(),
    };

    let payloads = [
        json!({ "age": 36, "email": "ada@example.com", "address": null }),
        json!({ "age": -1, "email": "not-an-email", "address": null }),
        json!({
            "age": "36",
            "email": "ada@example.com",
            "address": { "zip": "123", "country": "US" }
        }),
    ];

    for payload in &payloads {
        match validate_json(&schema, payload, Some("user")) {
            Ok(()) => println!("✓ {payload}"),
            Err(errors) => {
                println!("✗ {payload}");
                println!("{}", serde_json::to_string_pretty(&errors).unwrap_or_default());
            }
        }
    }
}
