use deep_copy::deep_copy;

#[deep_copy]
trait Shape {
    fn area(&self) -> f64;
}

fn main() {
}
