//! A failed round trip panics in the caller of `deep_copy`

use deep_copy::deep_copy;
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct Refuses;

impl Serialize for Refuses {
    fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        Err(<S::Error as ser::Error>::custom("refused"))
    }
}

/// Writes a byte, expects a string back
#[derive(Debug)]
struct Lopsided;

impl Serialize for Lopsided {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(1)
    }
}

impl<'de> Deserialize<'de> for Lopsided {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Err(<D::Error as de::Error>::custom(format!("got {:?}", s)))
    }
}

#[deep_copy]
#[derive(Debug)]
struct HoldsRefuses {
    r: Refuses,
}

#[deep_copy]
#[derive(Debug)]
struct HoldsLopsided {
    l: Lopsided,
}

#[test]
#[should_panic(expected = "failed to write object graph: refused")]
fn write_failure() {
    let _ = HoldsRefuses { r: Refuses }.deep_copy();
}

#[test]
#[should_panic(expected = "failed to read object graph back")]
fn read_failure() {
    let _ = HoldsLopsided { l: Lopsided }.deep_copy();
}
