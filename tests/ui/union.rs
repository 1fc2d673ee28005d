use deep_copy::deep_copy;

#[deep_copy]
union Bits {
    i: u32,
    f: f32,
}

fn main() {
}
