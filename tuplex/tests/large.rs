#![recursion_limit = "256"]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tuplex::Tuple;

type Widest = Tuple<(
    u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    u8, u8, u8, u8, u8, u8, u8, u8,
)>;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn widest_tuple_supports_every_operation() {
    let mut t = Widest::default();
    *t.get_mut::<127>() = 1;
    assert_eq!(*t.get::<0>(), 0);
    assert_eq!(*t.get::<127>(), 1);
    assert_eq!(t.arity(), 128);

    let copy = t.clone();
    assert_eq!(copy, t);
    assert_eq!(hash_of(&copy), hash_of(&t));
    assert_ne!(copy, Widest::default());

    let expected = format!(
        "({})",
        (0..128)
            .map(|i| if i == 127 { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(", ")
    );
    assert_eq!(t.to_string(), expected);
}
