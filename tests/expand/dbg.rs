//! `dbg` prints a report at compile time, and changes nothing else.

use deep_copy::deep_copy;

#[deep_copy(dbg)]
#[derive(Debug, PartialEq)]
pub struct Config {
    name: String,
    retries: u8,
}

fn main() {
    let c = Config {
        name: "svc".into(),
        retries: 3,
    };
    if c.deep_copy() != c {
        panic!();
    }
}
