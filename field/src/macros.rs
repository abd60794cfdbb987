//! Internal macros.

/// Define borrow and non-borrow variants of `Add`.
macro_rules! define_add_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b> Add<&'b $rhs> for $lhs {
            type Output = $out;
            fn add(self, rhs: &'b $rhs) -> $out {
                &self + rhs
            }
        }

        impl<'a> Add<$rhs> for &'a $lhs {
            type Output = $out;
            fn add(self, rhs: $rhs) -> $out {
                self + &rhs
            }
        }

        impl Add<$rhs> for $lhs {
            type Output = $out;
            fn add(self, rhs: $rhs) -> $out {
                &self + &rhs
            }
        }
    };
}

/// Define borrow and non-borrow variants of `Sub`.
macro_rules! define_sub_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b> Sub<&'b $rhs> for $lhs {
            type Output = $out;
            fn sub(self, rhs: &'b $rhs) -> $out {
                &self - rhs
            }
        }

        impl<'a> Sub<$rhs> for &'a $lhs {
            type Output = $out;
            fn sub(self, rhs: $rhs) -> $out {
                self - &rhs
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = $out;
            fn sub(self, rhs: $rhs) -> $out {
                &self - &rhs
            }
        }
    };
}

/// Define borrow and non-borrow variants of `Mul`.
macro_rules! define_mul_variants {
    (LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b> Mul<&'b $rhs> for $lhs {
            type Output = $out;
            fn mul(self, rhs: &'b $rhs) -> $out {
                &self * rhs
            }
        }

        impl<'a> Mul<$rhs> for &'a $lhs {
            type Output = $out;
            fn mul(self, rhs: $rhs) -> $out {
                self * &rhs
            }
        }

        impl Mul<$rhs> for $lhs {
            type Output = $out;
            fn mul(self, rhs: $rhs) -> $out {
                &self * &rhs
            }
        }
    };
}

/// Define the `*Assign` operators in terms of the borrowed binary operator.
macro_rules! define_assign_variants {
    ($t:ty) => {
        impl<'b> AddAssign<&'b $t> for $t {
            fn add_assign(&mut self, rhs: &'b $t) {
                *self = &*self + rhs;
            }
        }

        impl AddAssign<$t> for $t {
            fn add_assign(&mut self, rhs: $t) {
                *self = &*self + &rhs;
            }
        }

        impl<'b> SubAssign<&'b $t> for $t {
            fn sub_assign(&mut self, rhs: &'b $t) {
                *self = &*self - rhs;
            }
        }

        impl SubAssign<$t> for $t {
            fn sub_assign(&mut self, rhs: $t) {
                *self = &*self - &rhs;
            }
        }

        impl<'b> MulAssign<&'b $t> for $t {
            fn mul_assign(&mut self, rhs: &'b $t) {
                *self = &*self * rhs;
            }
        }

        impl MulAssign<$t> for $t {
            fn mul_assign(&mut self, rhs: $t) {
                *self = &*self * &rhs;
            }
        }
    };
}
