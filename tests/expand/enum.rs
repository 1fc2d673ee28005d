//! An enum with data in its variants.

use deep_copy::deep_copy;

#[deep_copy]
#[derive(PartialEq)]
enum Message {
    Quit,
    Move { x: i32, y: i32 },
    Write(String),
}

fn main() {
    let m = Message::Write("hello".into());
    if m.deep_copy() != m {
        panic!();
    }
    let moved = Message::Move { x: 1, y: 2 };
    if moved.deep_copy() == Message::Quit {
        panic!();
    }
}
