//! Well-known identifying signatures.
//!
//! JPEG application segments (APPn) carry most of the metadata that
//! identifies a camera, an editor or an author. Their two-byte markers
//! are the default scrub targets.

use super::set::PatternSet;

/// APP0 marker (JFIF header).
pub const APP0_JFIF: [u8; 2] = [0xFF, 0xE0];
/// APP1 marker (EXIF and XMP).
pub const APP1_EXIF: [u8; 2] = [0xFF, 0xE1];
/// APP2 marker (ICC profile, FlashPix).
pub const APP2_ICC: [u8; 2] = [0xFF, 0xE2];
/// APP13 marker (Photoshop IRB / IPTC).
pub const APP13_PHOTOSHOP: [u8; 2] = [0xFF, 0xED];
/// APP14 marker (Adobe).
pub const APP14_ADOBE: [u8; 2] = [0xFF, 0xEE];

/// Default signatures, in match priority order.
pub const JPEG_APP_MARKERS: [[u8; 2]; 5] = [
    APP0_JFIF,
    APP1_EXIF,
    APP2_ICC,
    APP13_PHOTOSHOP,
    APP14_ADOBE,
];

/// Returns the default suspicious signature set.
pub fn jpeg_app_markers() -> PatternSet {
    PatternSet::from_static(&JPEG_APP_MARKERS)
}

/// Human-readable name of a known signature, if any.
pub fn describe(pattern: &[u8]) -> Option<&'static str> {
    match pattern {
        [0xFF, 0xE0] => Some("APP0 (JFIF)"),
        [0xFF, 0xE1] => Some("APP1 (EXIF/XMP)"),
        [0xFF, 0xE2] => Some("APP2 (ICC/FlashPix)"),
        [0xFF, 0xED] => Some("APP13 (Photoshop IRB)"),
        [0xFF, 0xEE] => Some("APP14 (Adobe)"),
        _ => None,
    }
}
