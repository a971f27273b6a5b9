//! Operations on complex numbers, one file per operation.

mod arith;
mod exp;
mod ln;
mod log;
mod pow;
mod sqrt;
mod sin;
mod cos;
mod tan;
mod cot;
mod sec;
mod csc;
mod sinh;
mod cosh;
mod tanh;
mod coth;
mod sech;
mod csch;
mod asin;
mod acos;
mod atan;
mod acot;
mod asec;
mod acsc;
mod asinh;
mod acosh;
mod atanh;
mod acoth;
mod asech;
mod acsch;
mod util;
