/// Fallback viewpoint used when no device position is available (Bangalore)
pub const DEFAULT_FALLBACK_LATITUDE: f64 = 12.9716;
pub const DEFAULT_FALLBACK_LONGITUDE: f64 = 77.5946;

/// Default map zoom level for the initial viewpoint
pub const DEFAULT_MAP_ZOOM: u8 = 15;

// =============================================================================
// QR CODES
// =============================================================================

/// Number of distinct sequence values in a QR code (`000`..=`999`)
pub const QR_SEQUENCE_SPACE: u16 = 1000;

/// Characters of the category label kept in the QR prefix
pub const QR_PREFIX_LEN: usize = 3;

/// Characters of the hyphenated name kept in the QR suffix
pub const QR_SUFFIX_LEN: usize = 10;
