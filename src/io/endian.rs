//! Fixed-width integer reads from byte slices.
//!
//! EXIF data may be stored either little-endian or big-endian, as declared
//! by the TIFF header. Every multi-byte read in the decoder goes through
//! these helpers, which return `None` instead of panicking when the slice is
//! too short. Only the leading bytes are read; anything after them is
//! ignored.

/// Read a little-endian u16 from the start of a byte slice.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> Option<u16> {
    Some(u16::from_le_bytes(take::<2>(bytes)?))
}

/// Read a big-endian u16 from the start of a byte slice.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> Option<u16> {
    Some(u16::from_be_bytes(take::<2>(bytes)?))
}

/// Read a little-endian u32 from the start of a byte slice.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> Option<u32> {
    Some(u32::from_le_bytes(take::<4>(bytes)?))
}

/// Read a big-endian u32 from the start of a byte slice.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> Option<u32> {
    Some(u32::from_be_bytes(take::<4>(bytes)?))
}

#[inline]
fn take<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    bytes.get(..N)?.try_into().ok()
}
