//! Standard library traits for `Complex`.

use crate::defs::Error;
use crate::num::Complex;

/// Standard library features
pub mod ops {

    use super::*;
    use core::{
        fmt::Display, fmt::Formatter, iter::Product, iter::Sum, ops::Add, ops::AddAssign, ops::Div,
        ops::DivAssign, ops::Mul, ops::MulAssign, ops::Neg, ops::Sub, ops::SubAssign,
        str::FromStr,
    };

    macro_rules! impl_arith_op {
        ($trait:ident, $fname:ident, $assign_trait:ident, $assign_fname:ident, $real_fname:ident) => {
            impl $trait for Complex {
                type Output = Self;
                fn $fname(self, rhs: Self) -> Self::Output {
                    Complex::$fname(&self, &rhs)
                }
            }

            impl $trait<&Complex> for Complex {
                type Output = Self;
                fn $fname(self, rhs: &Complex) -> Self::Output {
                    Complex::$fname(&self, rhs)
                }
            }

            impl $trait<&Complex> for &Complex {
                type Output = Complex;
                fn $fname(self, rhs: &Complex) -> Self::Output {
                    Complex::$fname(self, rhs)
                }
            }

            impl $trait<Complex> for &Complex {
                type Output = Complex;
                fn $fname(self, rhs: Complex) -> Self::Output {
                    Complex::$fname(self, &rhs)
                }
            }

            impl $trait<f64> for Complex {
                type Output = Self;
                fn $fname(self, rhs: f64) -> Self::Output {
                    Complex::$real_fname(&self, rhs)
                }
            }

            impl $trait<f64> for &Complex {
                type Output = Complex;
                fn $fname(self, rhs: f64) -> Self::Output {
                    Complex::$real_fname(self, rhs)
                }
            }

            impl $assign_trait for Complex {
                fn $assign_fname(&mut self, rhs: Self) {
                    *self = Complex::$fname(self, &rhs)
                }
            }

            impl $assign_trait<&Complex> for Complex {
                fn $assign_fname(&mut self, rhs: &Complex) {
                    *self = Complex::$fname(self, rhs)
                }
            }

            impl $assign_trait<f64> for Complex {
                fn $assign_fname(&mut self, rhs: f64) {
                    *self = Complex::$real_fname(self, rhs)
                }
            }
        };
    }

    impl_arith_op!(Add, add, AddAssign, add_assign, add_real);
    impl_arith_op!(Sub, sub, SubAssign, sub_assign, sub_real);
    impl_arith_op!(Mul, mul, MulAssign, mul_assign, mul_real);
    impl_arith_op!(Div, div, DivAssign, div_assign, div_real);

    impl Neg for Complex {
        type Output = Self;
        fn neg(self) -> Self::Output {
            Complex::neg(&self)
        }
    }

    impl Neg for &Complex {
        type Output = Complex;
        fn neg(self) -> Self::Output {
            Complex::neg(self)
        }
    }

    impl From<f64> for Complex {
        fn from(f: f64) -> Self {
            Complex::from_real(f)
        }
    }

    impl From<(f64, f64)> for Complex {
        fn from((re, im): (f64, f64)) -> Self {
            Complex::new(re, im)
        }
    }

    impl From<Complex> for (f64, f64) {
        fn from(z: Complex) -> Self {
            (z.re(), z.im())
        }
    }

    /// Writes the short form, or the explicit form with the alternate flag `{:#}`.
    impl Display for Complex {
        fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
            f.write_str(&self.format(f.alternate()))
        }
    }

    impl Default for Complex {
        fn default() -> Complex {
            Complex::zero()
        }
    }

    impl FromStr for Complex {
        type Err = Error;

        fn from_str(src: &str) -> Result<Complex, Self::Err> {
            Complex::parse(src)
        }
    }

    impl Product for Complex {
        fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
            let mut acc = Complex::one();
            for v in iter {
                acc *= v;
            }
            acc
        }
    }

    impl Sum for Complex {
        fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
            let mut acc = Complex::zero();
            for v in iter {
                acc += v;
            }
            acc
        }
    }

    impl<'a> Product<&'a Complex> for Complex {
        fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
            let mut acc = Complex::one();
            for v in iter {
                acc *= v;
            }
            acc
        }
    }

    impl<'a> Sum<&'a Complex> for Complex {
        fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
            let mut acc = Complex::zero();
            for v in iter {
                acc += v;
            }
            acc
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::ParseErrorKind;
    use core::str::FromStr;

    #[test]
    fn test_ops_traits() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -4.0);

        assert_eq!(a.clone() + b.clone(), Complex::new(4.0, -2.0));
        assert_eq!(&a - &b, Complex::new(-2.0, 6.0));
        assert_eq!(&a * b.clone(), Complex::new(11.0, 2.0));
        assert!((a.clone() / &b).approx_eq(&Complex::new(-0.2, 0.4), 1e-15));
        assert_eq!(-&a, Complex::new(-1.0, -2.0));
        assert_eq!(&a * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(a.clone() - 1.0, Complex::new(0.0, 2.0));

        let mut c = a.clone();
        c += &b;
        c -= 1.0;
        c *= Complex::i();
        assert_eq!(c, Complex::new(2.0, 3.0));
        c /= 2.0;
        assert_eq!(c, Complex::new(1.0, 1.5));

        // the real operand keeps the sign of a zero imaginary part
        let z = Complex::new(1.0, -0.0) + 1.0;
        assert!(z.is_identical(&Complex::new(2.0, -0.0)));

        let z = -Complex::new(0.0, f64::NAN);
        assert!(z.re().is_sign_negative() && z.im().is_nan());
    }

    #[test]
    fn test_sum_product() {
        let v = [Complex::new(1.0, 1.0), Complex::new(2.0, -3.0), Complex::i()];

        let s: Complex = v.iter().sum();
        assert_eq!(s, Complex::new(3.0, -1.0));

        let p: Complex = v.iter().product();
        assert_eq!(p, Complex::new(1.0, 5.0));

        let p: Complex = v.into_iter().product();
        assert_eq!(p, Complex::new(1.0, 5.0));

        let e: Complex = core::iter::empty::<Complex>().sum();
        assert!(e.is_identical(&Complex::zero()));

        let e: Complex = core::iter::empty::<Complex>().product();
        assert!(e.is_identical(&Complex::one()));
    }

    #[test]
    fn test_conversions() {
        assert!(Complex::from(-0.0).is_identical(&Complex::new(-0.0, 0.0)));
        assert!(Complex::from((1.0, -2.0)).is_identical(&Complex::new(1.0, -2.0)));
        assert_eq!(<(f64, f64)>::from(Complex::new(3.0, 4.0)), (3.0, 4.0));
        assert!(Complex::default().is_identical(&Complex::zero()));
    }

    #[test]
    fn test_display_from_str() {
        let z = Complex::new(1.0, -0.0);
        assert_eq!(format!("{}", z), "1");
        assert_eq!(format!("{:#}", z), "1-0i");
        assert_eq!(Complex::new(-2.0, 1.0).to_string(), "-2+i");

        let z = Complex::from_str(" 2.5-i ").unwrap();
        assert!(z.is_identical(&Complex::new(2.5, -1.0)));

        let z: Complex = "-infi".parse().unwrap();
        assert!(z.is_identical(&Complex::new(0.0, f64::NEG_INFINITY)));

        assert_eq!(Complex::from_str("2j"), Err(Error::InvalidFormat(ParseErrorKind::UnexpectedChar('j'))));
    }
}

#[cfg(feature = "serde")]
#[cfg(test)]
mod serde_tests {

    use super::*;

    #[test]
    fn test_serde() {
        let z = Complex::new(-1.5, 0.0);

        let json = serde_json::to_string(&z).unwrap();
        assert_eq!("\"-1.5+0i\"", json);

        let z2 = serde_json::from_str::<Complex>(&json).unwrap();
        assert!(z.is_identical(&z2));
    }
}
