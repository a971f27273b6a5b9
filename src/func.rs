//! Free functions mirroring the methods of `Complex`.

use crate::num::Complex;

macro_rules! gen_fn_unary {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        pub fn $fname(z: &Complex) -> Complex {
            z.$fname()
        }
    };
}

macro_rules! gen_fn_binary {
    ($comment:literal, $fname:ident, $arg:ident) => {
        #[doc=$comment]
        pub fn $fname(z: &Complex, $arg: &Complex) -> Complex {
            z.$fname($arg)
        }
    };
}

macro_rules! gen_fn_real {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        pub fn $fname(z: &Complex) -> f64 {
            z.$fname()
        }
    };
}

gen_fn_binary!("Returns `z + z2`.", add, z2);
gen_fn_binary!("Returns `z - z2`.", sub, z2);
gen_fn_binary!("Returns `z * z2`.", mul, z2);
gen_fn_binary!("Returns `z / z2`.", div, z2);
gen_fn_binary!("Returns `z` raised to the power `e`.", pow, e);
gen_fn_binary!("Returns the logarithm of `z` to the base `b`.", log, b);

gen_fn_unary!("Returns `-z`.", neg);
gen_fn_unary!("Returns the complex conjugate of `z`.", conj);
gen_fn_unary!("Returns `1 / z`.", recip);

gen_fn_real!("Returns the magnitude of `z`.", abs);
gen_fn_real!("Returns the phase of `z` in the range [-pi, pi].", arg);

gen_fn_unary!("Returns the principal square root of `z`.", sqrt);
gen_fn_unary!("Returns `e` to the power of `z`.", exp);
gen_fn_unary!("Returns the principal natural logarithm of `z`.", ln);
gen_fn_unary!("Returns the principal logarithm base 2 of `z`.", log2);
gen_fn_unary!("Returns the principal logarithm base 10 of `z`.", log10);

gen_fn_unary!("Returns the sine of `z`.", sin);
gen_fn_unary!("Returns the cosine of `z`.", cos);
gen_fn_unary!("Returns the tangent of `z`.", tan);
gen_fn_unary!("Returns the cotangent of `z`.", cot);
gen_fn_unary!("Returns the secant of `z`.", sec);
gen_fn_unary!("Returns the cosecant of `z`.", csc);

gen_fn_unary!("Returns the hyperbolic sine of `z`.", sinh);
gen_fn_unary!("Returns the hyperbolic cosine of `z`.", cosh);
gen_fn_unary!("Returns the hyperbolic tangent of `z`.", tanh);
gen_fn_unary!("Returns the hyperbolic cotangent of `z`.", coth);
gen_fn_unary!("Returns the hyperbolic secant of `z`.", sech);
gen_fn_unary!("Returns the hyperbolic cosecant of `z`.", csch);

gen_fn_unary!("Returns the principal arcsine of `z`.", asin);
gen_fn_unary!("Returns the principal arccosine of `z`.", acos);
gen_fn_unary!("Returns the principal arctangent of `z`.", atan);
gen_fn_unary!("Returns the principal arccotangent of `z`.", acot);
gen_fn_unary!("Returns the principal arcsecant of `z`.", asec);
gen_fn_unary!("Returns the principal arccosecant of `z`.", acsc);

gen_fn_unary!("Returns the principal inverse hyperbolic sine of `z`.", asinh);
gen_fn_unary!("Returns the principal inverse hyperbolic cosine of `z`.", acosh);
gen_fn_unary!("Returns the principal inverse hyperbolic tangent of `z`.", atanh);
gen_fn_unary!("Returns the principal inverse hyperbolic cotangent of `z`.", acoth);
gen_fn_unary!("Returns the principal inverse hyperbolic secant of `z`.", asech);
gen_fn_unary!("Returns the principal inverse hyperbolic cosecant of `z`.", acsch);
