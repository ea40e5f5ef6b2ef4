//! Fixed table of first-class ports.
//!
//! The list mirrors the Go porting policy's first-class tier. It is
//! static data, never derived from the toolchain at runtime.

use super::Platform;

pub const FIRST_CLASS: &[&str] = &[
    "linux/amd64",
    "linux/386",
    "linux/arm",
    "linux/arm64",
    "darwin/amd64",
    "windows/amd64",
    "windows/386",
];

pub fn is_first_class(platform: &Platform) -> bool {
    let key = platform.to_string();
    FIRST_CLASS.contains(&key.as_str())
}
