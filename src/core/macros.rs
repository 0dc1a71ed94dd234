//! Macros for implementing bit operations and the `From` trait on single-field tuple structs.

/// Implements one binary bit operation and its assigning form, for both the wrapper type
/// and the raw inner type as the right-hand side.
macro_rules! impl_indv_bit_ops {
    ($t:ty, $b:ty, $tname:ident, $fname:ident, $w:ident, $ta_name:ident, $fa_name:ident) => {
        impl $tname for $t {
            type Output = $t;

            #[inline]
            fn $fname(self, rhs: $t) -> $t {
                Self::from((self.0).$w(rhs.0))
            }
        }

        impl $ta_name for $t {
            #[inline]
            fn $fa_name(&mut self, rhs: $t) {
                *self = Self::from((self.0).$w(rhs.0));
            }
        }

        impl $tname<$b> for $t {
            type Output = $t;

            #[inline]
            fn $fname(self, rhs: $b) -> $t {
                Self::from((self.0).$w(rhs))
            }
        }

        impl $ta_name<$b> for $t {
            #[inline]
            fn $fa_name(&mut self, rhs: $b) {
                *self = Self::from((self.0).$w(rhs));
            }
        }
    };
}

/// Implements `&, |, ^, !`, and `From` in both directions for a struct consisting of a
/// singular tuple of an integer type.
macro_rules! impl_bit_ops {
    ($t:tt, $b:tt) => {
        impl From<$b> for $t {
            fn from(bit_type: $b) -> Self {
                $t(bit_type)
            }
        }

        impl From<$t> for $b {
            fn from(it: $t) -> Self {
                it.0
            }
        }

        impl_indv_bit_ops!($t, $b, BitOr, bitor, bitor, BitOrAssign, bitor_assign);
        impl_indv_bit_ops!($t, $b, BitAnd, bitand, bitand, BitAndAssign, bitand_assign);
        impl_indv_bit_ops!($t, $b, BitXor, bitxor, bitxor, BitXorAssign, bitxor_assign);

        impl Not for $t {
            type Output = $t;

            #[inline]
            fn not(self) -> $t {
                $t(!self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::ops::*;

    #[derive(Copy, Clone, Default, Hash, PartialEq, Eq, Debug)]
    struct DummyBB(pub u64);

    impl_bit_ops!(DummyBB, u64);

    #[test]
    fn macro_impls_bb() {
        let a = DummyBB(0xFE00_C4D0);
        let b = DummyBB(0x0000_FFFF);
        assert_eq!((a & b).0, 0xFE00_C4D0 & 0x0000_FFFF);
        assert_eq!((a | b).0, 0xFE00_C4D0 | 0x0000_FFFF);
        assert_eq!((a ^ b).0, 0xFE00_C4D0 ^ 0x0000_FFFF);
        assert_eq!((!a).0, !0xFE00_C4D0u64);

        let mut c = a;
        c |= 1u64;
        assert_eq!(c.0, 0xFE00_C4D1);
        c &= b;
        assert_eq!(u64::from(c), 0xC4D1);
    }
}
