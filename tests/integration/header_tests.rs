//! Structural validation tests.
//!
//! Each test starts from a well-formed JPEG and corrupts one structural
//! field, checking that decoding aborts with the matching error.

use exif_parser::{decode_exif, ExifError};

use super::test_utils::{jpeg_with_app1, ByteOrderType, ExifBuilder, EXIF_BLOCK_OFFSET};

/// Position of the TIFF header within `jpeg_with_app1` output.
const TIFF_OFFSET: usize = EXIF_BLOCK_OFFSET + 6;

fn valid_jpeg(order: ByteOrderType) -> Vec<u8> {
    ExifBuilder::new(order)
        .ascii(0x010F, "Canon")
        .short(0x0112, 1)
        .build_jpeg()
}

// =============================================================================
// APP1 Segment
// =============================================================================

#[test]
fn test_declared_length_past_end_of_file() {
    let mut data = valid_jpeg(ByteOrderType::LittleEndian);
    data[EXIF_BLOCK_OFFSET - 2..EXIF_BLOCK_OFFSET].copy_from_slice(&0xFFF0u16.to_be_bytes());

    match decode_exif(&data) {
        Err(ExifError::SegmentTooShort {
            declared,
            available,
        }) => {
            assert_eq!(declared, 0xFFF0);
            assert_eq!(available, data.len() - (EXIF_BLOCK_OFFSET - 2));
        }
        other => panic!("expected SegmentTooShort, got {:?}", other),
    }
}

#[test]
fn test_length_field_cut_off() {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00];
    assert!(matches!(
        decode_exif(&data),
        Err(ExifError::SegmentTooShort { .. })
    ));

    data.truncate(4);
    assert!(matches!(
        decode_exif(&data),
        Err(ExifError::SegmentTooShort { .. })
    ));
}

#[test]
fn test_length_smaller_than_length_field() {
    let data = [0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x01, 0xFF, 0xD9];
    assert_eq!(decode_exif(&data), Err(ExifError::InvalidSegmentLength(1)));
}

// =============================================================================
// EXIF Identifier
// =============================================================================

#[test]
fn test_block_too_small() {
    let data = jpeg_with_app1(b"Exif\0\0II*\0");
    assert_eq!(
        decode_exif(&data),
        Err(ExifError::BlockTooSmall {
            required: 14,
            actual: 10
        })
    );

    let empty = jpeg_with_app1(b"");
    assert_eq!(
        decode_exif(&empty),
        Err(ExifError::BlockTooSmall {
            required: 14,
            actual: 0
        })
    );
}

#[test]
fn test_wrong_identifier() {
    let mut data = valid_jpeg(ByteOrderType::BigEndian);
    data[EXIF_BLOCK_OFFSET..EXIF_BLOCK_OFFSET + 6].copy_from_slice(b"Exif\0X");
    assert_eq!(decode_exif(&data), Err(ExifError::InvalidExifHeader));

    let xmp = jpeg_with_app1(b"http://ns.adobe.com/xap/1.0/\0");
    assert_eq!(decode_exif(&xmp), Err(ExifError::InvalidExifHeader));
}

// =============================================================================
// TIFF Header
// =============================================================================

#[test]
fn test_unknown_byte_order() {
    for marker in [*b"IM", *b"mm", [0, 0]] {
        let mut data = valid_jpeg(ByteOrderType::LittleEndian);
        data[TIFF_OFFSET..TIFF_OFFSET + 2].copy_from_slice(&marker);

        assert!(
            matches!(decode_exif(&data), Err(ExifError::UnknownByteOrder(_))),
            "{:?}",
            marker
        );
    }
}

#[test]
fn test_invalid_magic_number() {
    let mut little = valid_jpeg(ByteOrderType::LittleEndian);
    little[TIFF_OFFSET + 2..TIFF_OFFSET + 4].copy_from_slice(&43u16.to_le_bytes());
    assert_eq!(decode_exif(&little), Err(ExifError::InvalidMagicNumber(43)));

    // 42 written little-endian in a big-endian header reads as 0x2A00
    let mut big = valid_jpeg(ByteOrderType::BigEndian);
    big[TIFF_OFFSET + 2..TIFF_OFFSET + 4].copy_from_slice(&42u16.to_le_bytes());
    assert_eq!(decode_exif(&big), Err(ExifError::InvalidMagicNumber(0x2A00)));
}

#[test]
fn test_ifd_offset_out_of_bounds() {
    for order in [ByteOrderType::LittleEndian, ByteOrderType::BigEndian] {
        let mut data = valid_jpeg(order);
        data[TIFF_OFFSET + 4..TIFF_OFFSET + 8].copy_from_slice(&order.u32(0xFFFF_FFFF));

        assert!(matches!(
            decode_exif(&data),
            Err(ExifError::IfdOffsetOutOfBounds {
                offset: 0xFFFF_FFFF,
                ..
            })
        ));
    }
}

#[test]
fn test_ifd_count_straddles_end_of_block() {
    // Only one byte of the entry count fits in the block
    let block = ExifBuilder::new(ByteOrderType::LittleEndian).build_block();
    let last = (block.len() - 6 - 1) as u32;

    let mut data = jpeg_with_app1(&block);
    data[TIFF_OFFSET + 4..TIFF_OFFSET + 8].copy_from_slice(&last.to_le_bytes());

    assert_eq!(
        decode_exif(&data),
        Err(ExifError::IfdOffsetOutOfBounds {
            offset: last,
            block_len: block.len()
        })
    );
}

#[test]
fn test_ifd_count_at_end_of_block() {
    // IFD offset pointing at the final two bytes: a zero entry count
    let block = ExifBuilder::new(ByteOrderType::LittleEndian).build_block();
    let last = (block.len() - 6 - 2) as u32;

    let mut data = jpeg_with_app1(&block);
    data[TIFF_OFFSET + 4..TIFF_OFFSET + 8].copy_from_slice(&last.to_le_bytes());

    let record = decode_exif(&data).unwrap();
    assert!(record.is_empty());
}
