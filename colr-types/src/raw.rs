//! decoding fixed-size big-endian values

/// A fixed-size value that can be decoded from big-endian bytes.
///
/// Implementations must only be handed exactly [`RAW_BYTE_LEN`](Self::RAW_BYTE_LEN)
/// bytes; callers are responsible for bounds checking before decoding.
pub trait Scalar: Sized {
    /// The number of bytes used to encode this type.
    const RAW_BYTE_LEN: usize;

    /// Decode an instance of this type from big-endian bytes.
    ///
    /// Returns `None` if `bytes` does not have length `RAW_BYTE_LEN`.
    fn read(bytes: &[u8]) -> Option<Self>;
}

macro_rules! int_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            const RAW_BYTE_LEN: usize = std::mem::size_of::<$ty>();

            fn read(bytes: &[u8]) -> Option<Self> {
                bytes.try_into().ok().map(<$ty>::from_be_bytes)
            }
        }
    };
}

int_scalar!(u8);
int_scalar!(i8);
int_scalar!(u16);
int_scalar!(i16);
int_scalar!(u32);
int_scalar!(i32);

/// An internal macro for implementing `Scalar` for newtypes.
macro_rules! newtype_scalar {
    ($name:ident, $inner:ty) => {
        impl $crate::raw::Scalar for $name {
            const RAW_BYTE_LEN: usize = <$inner as $crate::raw::Scalar>::RAW_BYTE_LEN;

            fn read(bytes: &[u8]) -> Option<Self> {
                <$inner as $crate::raw::Scalar>::read(bytes).map(Self::from_raw_inner)
            }
        }
    };
}

pub(crate) use newtype_scalar;

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn big_endian_ints() {
        assert_eq!(u16::read(&[0x12, 0x34]), Some(0x1234));
        assert_eq!(i16::read(&[0xFF, 0xFE]), Some(-2));
        assert_eq!(u32::read(&[0xDE, 0xAD, 0xBE, 0xEF]), Some(0xDEAD_BEEF));
    }

    #[test]
    fn wrong_length_is_none() {
        assert_eq!(u16::read(&[0x12]), None);
        assert_eq!(u32::read(&[0, 0, 0, 0, 0]), None);
    }
}
