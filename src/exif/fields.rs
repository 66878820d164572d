//! Known EXIF fields and the tag table that maps tag IDs onto them.
//!
//! Only tags listed here reach the output record; any other tag ID found in
//! the directory is ignored. The table is a `static` and never changes, so
//! concurrent decodes can share it freely.
//!
//! GPS tags (0x0000-0x0012) are numbered in their own IFD's namespace. They
//! are listed for completeness but only match when a file stores them in
//! the first IFD.

/// Number of known fields.
pub const FIELD_COUNT: usize = 39;

// =============================================================================
// ExifField
// =============================================================================

/// A named field of the output record.
///
/// Declaration order is the order fields appear in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExifField {
    // -------------------------------------------------------------------------
    // Camera and capture (IFD0 / Exif SubIFD)
    // -------------------------------------------------------------------------
    Make,
    Model,
    Orientation,
    Software,
    DateTime,
    ExposureTime,
    FNumber,
    ExifOffset,
    IsoSpeedRatings,
    DateTimeOriginal,
    ShutterSpeedValue,
    ApertureValue,
    Flash,
    PixelXDimension,
    PixelYDimension,
    FocalLengthIn35mmFilm,
    ImageDescription,
    XResolution,
    YResolution,
    ResolutionUnit,
    Artist,
    YCbCrPositioning,
    Copyright,
    GpsInfoIfdPointer,
    ExifVersion,
    DateTimeDigitized,
    BrightnessValue,
    ExposureBiasValue,
    MaxApertureValue,
    MeteringMode,
    FocalLength,

    // -------------------------------------------------------------------------
    // GPS
    // -------------------------------------------------------------------------
    GpsVersionId,
    GpsLatitudeRef,
    GpsLatitude,
    GpsLongitudeRef,
    GpsLongitude,
    GpsAltitudeRef,
    GpsAltitude,
    GpsMapDatum,
}

/// Static description of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field this entry describes
    pub field: ExifField,
    /// Numeric tag ID
    pub tag: u16,
    /// Conventional EXIF tag name
    pub name: &'static str,
    /// Key used in serialized output
    pub key: &'static str,
}

const fn info(field: ExifField, tag: u16, name: &'static str, key: &'static str) -> FieldInfo {
    FieldInfo {
        field,
        tag,
        name,
        key,
    }
}

/// Field table, indexed by `ExifField as usize`.
static FIELD_TABLE: [FieldInfo; FIELD_COUNT] = FIELDS;

const FIELDS: [FieldInfo; FIELD_COUNT] = {
    use ExifField::*;
    [
        info(Make, 0x010F, "Make", "make"),
        info(Model, 0x0110, "Model", "model"),
        info(Orientation, 0x0112, "Orientation", "orientation"),
        info(Software, 0x0131, "Software", "software"),
        info(DateTime, 0x0132, "DateTime", "date_time"),
        info(ExposureTime, 0x829A, "ExposureTime", "exposure_time"),
        info(FNumber, 0x829D, "FNumber", "f_number"),
        info(ExifOffset, 0x8769, "ExifOffset", "exif_offset"),
        info(IsoSpeedRatings, 0x8827, "ISOSpeedRatings", "iso_speed_ratings"),
        info(DateTimeOriginal, 0x9003, "DateTimeOriginal", "date_time_original"),
        info(ShutterSpeedValue, 0x9201, "ShutterSpeedValue", "shutter_speed_value"),
        info(ApertureValue, 0x9202, "ApertureValue", "aperture_value"),
        info(Flash, 0x9209, "Flash", "flash"),
        info(PixelXDimension, 0xA002, "PixelXDimension", "pixel_x_dimension"),
        info(PixelYDimension, 0xA003, "PixelYDimension", "pixel_y_dimension"),
        info(FocalLengthIn35mmFilm, 0xA405, "FocalLengthIn35mmFilm", "focal_length_in_35mm_film"),
        info(ImageDescription, 0x010E, "ImageDescription", "image_description"),
        info(XResolution, 0x011A, "XResolution", "x_resolution"),
        info(YResolution, 0x011B, "YResolution", "y_resolution"),
        info(ResolutionUnit, 0x0128, "ResolutionUnit", "resolution_unit"),
        info(Artist, 0x013B, "Artist", "artist"),
        info(YCbCrPositioning, 0x0213, "YCbCrPositioning", "y_cb_cr_positioning"),
        info(Copyright, 0x8298, "Copyright", "copyright"),
        info(GpsInfoIfdPointer, 0x8825, "GPSInfoIFDPointer", "gps_info_ifd_pointer"),
        info(ExifVersion, 0x9000, "ExifVersion", "exif_version"),
        info(DateTimeDigitized, 0x9004, "DateTimeDigitized", "date_time_digitized"),
        info(BrightnessValue, 0x9203, "BrightnessValue", "brightness_value"),
        info(ExposureBiasValue, 0x9204, "ExposureBiasValue", "exposure_bias_value"),
        info(MaxApertureValue, 0x9205, "MaxApertureValue", "max_aperture_value"),
        info(MeteringMode, 0x9207, "MeteringMode", "metering_mode"),
        info(FocalLength, 0x920A, "FocalLength", "focal_length"),
        info(GpsVersionId, 0x0000, "GPSVersionID", "gps_version_id"),
        info(GpsLatitudeRef, 0x0001, "GPSLatitudeRef", "gps_latitude_ref"),
        info(GpsLatitude, 0x0002, "GPSLatitude", "gps_latitude"),
        info(GpsLongitudeRef, 0x0003, "GPSLongitudeRef", "gps_longitude_ref"),
        info(GpsLongitude, 0x0004, "GPSLongitude", "gps_longitude"),
        info(GpsAltitudeRef, 0x0005, "GPSAltitudeRef", "gps_altitude_ref"),
        info(GpsAltitude, 0x0006, "GPSAltitude", "gps_altitude"),
        info(GpsMapDatum, 0x0012, "GPSMapDatum", "gps_map_datum"),
    ]
};

impl ExifField {
    /// Every field, in declaration order.
    pub const ALL: [ExifField; FIELD_COUNT] = {
        let mut all = [ExifField::Make; FIELD_COUNT];
        let mut i = 0;
        while i < FIELD_COUNT {
            all[i] = FIELDS[i].field;
            i += 1;
        }
        all
    };

    /// Look up the field for a tag ID.
    ///
    /// Returns `None` for tags that are not part of the record.
    pub fn from_tag(tag: u16) -> Option<Self> {
        FIELD_TABLE
            .iter()
            .find(|info| info.tag == tag)
            .map(|info| info.field)
    }

    /// Static description of this field.
    #[inline]
    pub fn info(self) -> &'static FieldInfo {
        &FIELD_TABLE[self as usize]
    }

    /// Numeric tag ID.
    #[inline]
    pub fn tag(self) -> u16 {
        self.info().tag
    }

    /// Conventional EXIF tag name, e.g. `ISOSpeedRatings`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Key used in serialized output, e.g. `iso_speed_ratings`.
    #[inline]
    pub fn key(self) -> &'static str {
        self.info().key
    }
}

impl std::fmt::Display for ExifField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
