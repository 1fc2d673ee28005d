//! utilities and common code for testing

use super::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Compiles only if `T` carries the copy capability
pub fn assert_copy_capable<T: Serialize + DeserializeOwned>() {}

const EXPAND_TEST_GLOB: &str = "expand/*.rs";
const EXPAND_MACROTEST_IGNORE_GLOB: &str = "*.expanded.rs";

/// List the test cases in tests/expand/*.rs
///
/// Filters out *.expanded.rs, which are macrotest's snapshots.
pub fn list_expand_test_paths() -> Vec<PathBuf> {
    let ignore = glob::Pattern::new(EXPAND_MACROTEST_IGNORE_GLOB).unwrap();

    glob::glob(EXPAND_TEST_GLOB)
        .unwrap()
        .filter_map(move |path| {
            let path = path.unwrap();
            if ignore.matches_path(&path) {
                return None;
            }
            Some(path)
        })
        .collect()
}

/// The glob to give `macrotest`, which ignores `*.expanded.rs` itself
///
/// macrotest is faster and less noisy if run once with a single glob.
pub fn expand_test_glob_for_macrotest() -> &'static str {
    EXPAND_TEST_GLOB
}
