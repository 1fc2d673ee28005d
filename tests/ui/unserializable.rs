use deep_copy::deep_copy;

struct Opaque;

#[deep_copy]
struct HoldsOpaque {
    o: Opaque,
}

fn main() {
}
