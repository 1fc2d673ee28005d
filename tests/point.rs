//! The basic case: a plain struct of plain values

use crate::tutils::assert_copy_capable;
use deep_copy::deep_copy;

#[deep_copy]
#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[deep_copy]
#[derive(Debug, PartialEq)]
struct Label {
    text: String,
    at: Point,
}

#[deep_copy]
#[derive(Debug, PartialEq)]
struct Pair(u8, String);

#[deep_copy]
#[derive(Debug, PartialEq)]
struct Unit;

#[test]
fn point() {
    let p = Point { x: 3, y: 4 };
    let q: Point = p.deep_copy();
    assert_eq!(q.x, 3);
    assert_eq!(q.y, 4);
    assert!(!std::ptr::eq(&p, &q));
}

#[test]
fn capability_added() {
    assert_copy_capable::<Point>();
    assert_copy_capable::<Label>();
    assert_copy_capable::<Pair>();
    assert_copy_capable::<Unit>();
}

#[test]
fn nested() {
    let l = Label {
        text: "origin".into(),
        at: Point { x: 0, y: -1 },
    };
    let m = l.deep_copy();
    assert_eq!(m, l);
    assert_ne!(m.text.as_ptr(), l.text.as_ptr());
}

#[test]
fn tuple_and_unit() {
    let p = Pair(7, "seven".into());
    assert_eq!(p.deep_copy(), Pair(7, "seven".into()));
    assert_eq!(Unit.deep_copy(), Unit);
}

#[test]
fn copy_of_copy() {
    let p = Point { x: i32::MIN, y: i32::MAX };
    assert_eq!(p.deep_copy().deep_copy(), p);
}
