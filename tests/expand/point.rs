//! The `Point` example, as a whole program.

use deep_copy::deep_copy;

#[deep_copy]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    let p = Point { x: 3, y: 4 };
    let q = p.deep_copy();

    // This generates much less macro output than assert_eq!
    if q.x != 3 || q.y != 4 || std::ptr::eq(&p, &q) {
        panic!();
    }
}
