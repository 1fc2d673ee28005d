//! Derives the user already wrote are kept, not duplicated

use crate::tutils::assert_copy_capable;
use deep_copy::deep_copy;
use serde::{Deserialize, Serialize};

#[deep_copy]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct AlreadyBoth {
    a: u8,
}

#[deep_copy]
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct OnlySerialize {
    long_name: u8,
}

#[deep_copy]
#[derive(Debug, PartialEq, serde::Deserialize)]
struct OnlyDeserialize {
    b: Option<String>,
}

#[deep_copy(crate = ::deep_copy)]
#[derive(Debug, PartialEq)]
struct ExplicitCrate {
    c: [u16; 3],
}

#[deep_copy]
#[derive(Debug, PartialEq)]
struct SkipsField {
    kept: u8,
    // serde helper attributes still work on what we derive
    #[serde(skip)]
    cache: Option<u32>,
}

#[test]
fn derives_merge() {
    assert_copy_capable::<AlreadyBoth>();
    assert_copy_capable::<OnlySerialize>();
    assert_copy_capable::<OnlyDeserialize>();
    assert_copy_capable::<ExplicitCrate>();

    assert_eq!(AlreadyBoth { a: 1 }.deep_copy(), AlreadyBoth { a: 1 });
    assert_eq!(
        OnlySerialize { long_name: 2 }.deep_copy(),
        OnlySerialize { long_name: 2 }
    );
    let d = OnlyDeserialize {
        b: Some("b".into()),
    };
    assert_eq!(d.deep_copy(), d);
    let e = ExplicitCrate { c: [1, 2, 3] };
    assert_eq!(e.deep_copy(), e);
}

#[test]
fn skipped_field_defaults() {
    let s = SkipsField {
        kept: 9,
        cache: Some(99),
    };
    assert_eq!(
        s.deep_copy(),
        SkipsField {
            kept: 9,
            cache: None
        }
    );
}
