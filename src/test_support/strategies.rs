use proptest::prelude::*;

use crate::object::Kind;

// Any of the four object kinds.
#[allow(dead_code)]
pub fn any_kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Blob),
        Just(Kind::Tree),
        Just(Kind::Commit),
        Just(Kind::Tag),
    ]
}

// Arbitrary object content, including the empty payload.
#[allow(dead_code)]
pub fn any_payload() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..2048)
}
