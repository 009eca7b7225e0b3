//! Tests for the Fields derive macro - successful cases.

use schemata_validator::prelude::*;

#[derive(Clone, Fields)]
pub struct Address {
    #[schema(tag = "zip")]
    zip: String,
}

#[derive(Clone, Fields)]
pub struct User {
    #[schema(tag = "name")]
    name: String,
    #[schema(tag = "age")]
    age: u8,
    #[schema(tag = "nickname")]
    nickname: Option<String>,
    #[schema(tag = "address")]
    address: Address,
    #[schema(tag = "-")]
    internal: u64,
    #[schema(skip)]
    cache: Vec<u8>,
    untagged: bool,
}

#[derive(Clone, Fields)]
pub struct Wrapper<T> {
    #[schema(tag = "inner")]
    inner: T,
}

fn main() {
    let user = User {
        name: "ada".into(),
        age: 36,
        nickname: None,
        address: Address { zip: "12345".into() },
        internal: 7,
        cache: Vec::new(),
        untagged: true,
    };

    assert_eq!(user.type_name(), "User");
    let tags: Vec<_> = user.fields().into_iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, ["name", "age", "nickname", "address"]);

    let schema = structure()
        .field("name", string().min(1))
        .field("nickname", string().optional())
        .field("address", structure().field("zip", string().min(5)));
    assert!(schema.check(&user).is_ok());
    assert!(schema.check(user.clone()).is_ok());
    assert!(schema.check(Some(user)).is_ok());

    let wrapper = Wrapper { inner: 5_i32 };
    assert!(structure().field("inner", int32().positive()).check(&wrapper).is_ok());
}
