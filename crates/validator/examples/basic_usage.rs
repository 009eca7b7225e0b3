//! Basic usage example for schemata-validator

use schemata_validator::prelude::*;
use schemata_validator::schema;

#[derive(Clone, Fields)]
struct Signup {
    #[schema(tag = "username")]
    username: String,
    #[schema(tag = "email")]
    email: String,
    #[schema(tag = "age")]
    age: u8,
    #[schema(tag = "terms")]
    terms: bool,
}

fn main() -> Result<(), SchemaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let schema = schema! {
        "username" => string().min(3).max(16).regex("^[a-z0-9_]+$")?,
        "email" => string().email().with_message("please enter a valid email"),
        "age" => uint8().gte(13),
        "terms" => boolean().is_true(),
    };

    let good = Signup {
        username: "ada_l".into(),
        email: "ada@example.com".into(),
        age: 36,
        terms: true,
    };
    match schema.check_tagged(&good, "signup") {
        Ok(()) => println!("✓ {} is valid", good.username),
        Err(errors) => println!("✗ {errors}"),
    }

    let bad = Signup {
        username: "Ada Lovelace".into(),
        email: "ada at example.com".into(),
        age: 9,
        terms: false,
    };
    if let Err(errors) = schema.check_tagged(&bad, "signup") {
        println!("✗ {} problems:", errors.len());
        for message in &errors {
            println!("  - {message}");
        }
    }

    Ok(())
}
