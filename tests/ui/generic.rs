use deep_copy::deep_copy;

#[deep_copy]
struct Wrapper<T> {
    inner: T,
}

fn main() {
}
