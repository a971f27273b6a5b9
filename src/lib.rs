//! Complex numbers over double precision floating point with special value semantics of C99 Annex G.
//!
//! Every operation accepts any combination of finite numbers, signed zeros, infinities and NaN parts,
//! and never panics. Signs of zero parts select the side of branch cuts, infinite parts
//! produce infinities or limits where the mathematics defines them, and NaN propagates otherwise.
//!
//! The library provides:
//!
//!  - Arithmetic: addition, subtraction, multiplication and division, including scaled division
//!    for operands near overflow or underflow.
//!  - Magnitude, phase, polar form, conjugate, reciprocal.
//!  - Square root, exponent, logarithms, power.
//!  - Circular and hyperbolic functions with their reciprocal counterparts, and the inverse functions
//!    taking principal values.
//!  - Parsing and formatting in algebraic form `a+bi`.
//!  - Standard library traits for the arithmetic operators, `Display`, `FromStr`, `Sum`, `Product`.
//!  - Optional `serde` serialization and random number generation.
//!
//! ## Examples
//!
//! ``` rust
//! use astro_complex::Complex;
//!
//! let z = Complex::new(1.0, 2.0);
//!
//! // operations return new numbers
//! let w = z.sqrt().mul(&z.exp());
//! assert!(w.is_finite());
//!
//! // operators
//! let q = &z / &Complex::new(0.0, 1.0);
//! assert_eq!(q, Complex::new(2.0, -1.0));
//!
//! // signed zero selects the side of the branch cut
//! let a = Complex::new(-4.0, 0.0).sqrt();
//! let b = Complex::new(-4.0, -0.0).sqrt();
//! assert_eq!(a.im(), 2.0);
//! assert_eq!(b.im(), -2.0);
//!
//! // parsing and formatting
//! let p: Complex = "3-i".parse().unwrap();
//! assert_eq!(p.to_string(), "3-i");
//! assert_eq!(format!("{:#}", Complex::new(1.0, -0.0)), "1-0i");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

mod common;
mod defs;
mod ext;
mod func;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::common::util::Flavor;
pub use crate::defs::Error;
pub use crate::defs::ParseErrorKind;
pub use crate::defs::Sign;
pub use crate::num::Complex;

pub use crate::func::*;

/// Mathematical constants and thresholds used by the operations.
pub mod consts {
    pub use crate::common::consts::{HALF_PI, LN_2, LOG10_E, LOG2_E, PI, QUARTER_PI, TWO_PI};
}
