use deep_copy::deep_copy;

#[deep_copy]
fn copy_me() {}

fn main() {
}
