//! Schemas are immutable and can be shared between threads.

use std::sync::Arc;
use std::thread;

use schemata_validator::prelude::*;
use schemata_validator::schema;

#[test]
fn one_schema_many_threads() {
    let schema = Arc::new(schema! {
        "n" => int64().range(0, 100),
    });

    thread::scope(|scope| {
        for i in 0..8_i64 {
            let schema = Arc::clone(&schema);
            scope.spawn(move || {
                for n in (i * 25)..(i * 25 + 25) {
                    let record = Record::new("N").with_field("n", n);
                    let tag = format!("t{i}");
                    let result = schema.check_tagged(record, &tag);
                    if n <= 100 {
                        assert!(result.is_ok());
                    } else {
                        assert_eq!(
                            result.unwrap_err().first(),
                            format!("<t{i}.n> failed <i64> validation for <Range(0, 100)>")
                        );
                    }
                }
            });
        }
    });
}
