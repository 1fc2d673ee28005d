use deep_copy::deep_copy;
use serde::{Deserialize, Serialize};

// Expanded before #[deep_copy] sees the item, so the derives are added twice
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[deep_copy]
struct DerivesFirst {
    a: u8,
}

fn main() {
}
