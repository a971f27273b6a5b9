//! Integration with third-party crates.

#[cfg(feature = "serde")]
mod de;

#[cfg(feature = "serde")]
mod ser;
