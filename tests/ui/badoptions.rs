use deep_copy::deep_copy;

#[deep_copy(skip(field))]
struct UnknownOption {
    field: u8,
}

#[deep_copy(crate = ::deep_copy, crate = ::other)]
struct Contradictory {
    field: u8,
}

fn main() {
}
