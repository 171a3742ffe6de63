use {
    quickcheck::{QuickCheck, TestResult},
    tuplex::{tuple, Tuple},
};

fn construct_then_get_property(a: i64, b: String, c: Vec<u8>) -> TestResult {
    let t = tuple![a, b.clone(), c.clone()];
    TestResult::from_bool(*t.get::<0>() == a && *t.get::<1>() == b && *t.get::<2>() == c)
}

#[test]
fn construct_then_get() {
    QuickCheck::new().quickcheck(construct_then_get_property as fn(_, _, _) -> TestResult)
}

fn swap_twice_property(a: (u8, String, bool), b: (u8, String, bool)) -> TestResult {
    let (mut x, mut y) = (Tuple::new(a.clone()), Tuple::new(b.clone()));
    tuplex::swap(&mut x, &mut y);
    if x != Tuple::new(b.clone()) || y != Tuple::new(a.clone()) {
        return TestResult::failed();
    }
    tuplex::swap(&mut x, &mut y);
    TestResult::from_bool(x.into_inner() == a && y.into_inner() == b)
}

#[test]
fn swap_twice_is_identity() {
    QuickCheck::new().quickcheck(swap_twice_property as fn(_, _) -> TestResult)
}

fn equality_property(a: (i32, char, String), b: (i32, char, String)) -> TestResult {
    let (x, y) = (Tuple::new(a.clone()), Tuple::new(b.clone()));
    let reflexive = x == x && y == y;
    let symmetric = (x == y) == (y == x);
    let element_wise = (x == y) == (a.0 == b.0 && a.1 == b.1 && a.2 == b.2);
    TestResult::from_bool(reflexive && symmetric && element_wise)
}

#[test]
fn equality_is_reflexive_symmetric_and_element_wise() {
    QuickCheck::new().quickcheck(equality_property as fn(_, _) -> TestResult)
}

fn equality_one_field_differs_property(a: u16, b: u16, s: String) -> TestResult {
    if a == b {
        return TestResult::discard();
    }
    TestResult::from_bool(tuple![a, s.clone()] != tuple![b, s])
}

#[test]
fn equality_detects_a_single_difference() {
    QuickCheck::new()
        .quickcheck(equality_one_field_differs_property as fn(_, _, _) -> TestResult)
}

fn copy_independence_property(a: (u32, Vec<i8>), replacement: u32) -> TestResult {
    let original = Tuple::new(a.clone());
    let mut copy = original.clone();
    *copy.get_mut::<0>() = replacement;
    copy.get_mut::<1>().push(0);
    TestResult::from_bool(original.into_inner() == a)
}

#[test]
fn copies_are_independent() {
    QuickCheck::new().quickcheck(copy_independence_property as fn(_, _) -> TestResult)
}

fn converting_construction_property(a: u8, b: i16, c: String) -> TestResult {
    let src = tuple![a, b, c.clone()];
    let owned: Tuple<(u32, i64, String)> = Tuple::convert_from(src.clone());
    let borrowed: Tuple<(u32, i64, String)> = Tuple::convert_from(&src);
    let expected = (u32::from(a), i64::from(b), c);
    TestResult::from_bool(owned == borrowed && owned.into_inner() == expected)
}

#[test]
fn converting_construction_converts_each_element() {
    QuickCheck::new()
        .quickcheck(converting_construction_property as fn(_, _, _) -> TestResult)
}

fn split_then_concat_property(a: u8, b: char, c: String, d: bool) -> TestResult {
    let t = tuple![a, b, c, d];
    let (front, back) = t.clone().split_at::<2>();
    TestResult::from_bool(front.concat(back) == t)
}

#[test]
fn split_then_concat_is_identity() {
    QuickCheck::new().quickcheck(split_then_concat_property as fn(_, _, _, _) -> TestResult)
}
