//! Generated code can be pointed at a reexport of the crate.

mod reexport {
    pub use ::deep_copy;
}

#[deep_copy::deep_copy(crate = crate::reexport::deep_copy)]
struct Cell {
    v: Vec<u8>,
}

fn main() {
    let c = Cell { v: vec![1] };
    let mut d = c.deep_copy();
    d.v.push(2);
    if c.v.len() != 1 {
        panic!();
    }
}
