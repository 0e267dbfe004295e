use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::ops::{BitAnd, BitOr, Not};

/// Flags that can be set on a `SpanContext`.
///
/// The only flag currently defined is [`TraceFlags::SAMPLED`], which carries a
/// sampling decision from a parent span to its children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Copy, Hash)]
pub struct TraceFlags(u8);

impl TraceFlags {
    /// Trace flags with the `sampled` flag set to `0`.
    pub const NOT_SAMPLED: TraceFlags = TraceFlags(0x00);

    /// Trace flags with the `sampled` flag set to `1`.
    pub const SAMPLED: TraceFlags = TraceFlags(0x01);

    /// Construct new trace flags
    pub const fn new(flags: u8) -> Self {
        TraceFlags(flags)
    }

    /// Returns `true` if the `sampled` flag is set
    pub fn is_sampled(&self) -> bool {
        (*self & TraceFlags::SAMPLED) == TraceFlags::SAMPLED
    }

    /// Returns copy of the current flags with the `sampled` flag set.
    pub fn with_sampled(&self, sampled: bool) -> Self {
        if sampled {
            *self | TraceFlags::SAMPLED
        } else {
            *self & !TraceFlags::SAMPLED
        }
    }

    /// Returns the flags as a `u8`
    pub fn to_u8(self) -> u8 {
        self.0
    }
}

impl BitAnd for TraceFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for TraceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl Not for TraceFlags {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl fmt::LowerHex for TraceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// A 16-byte value which identifies a given trace.
///
/// The bytes are opaque. Samplers that derive their decision from the id
/// read the leading 8 bytes and rely on the id generator filling them with
/// (close to) uniformly distributed random data. Swapping in a generator
/// that does not do so requires revisiting those samplers.
///
/// The id is valid if it contains at least one non-zero byte.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub struct TraceId([u8; 16]);

impl TraceId {
    /// Size of a trace id in bytes.
    pub const SIZE: usize = 16;

    /// Invalid trace id
    pub const INVALID: TraceId = TraceId([0; 16]);

    /// Create a trace id from its representation as a byte array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        TraceId(bytes)
    }

    /// Return the representation of this trace id as a byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Borrow the raw bytes of this trace id.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns `true` if at least one byte is non-zero.
    pub fn is_valid(&self) -> bool {
        *self != TraceId::INVALID
    }

    /// Converts a string in base 16 to a trace id.
    ///
    /// The hex digits are read most significant first, so the first two
    /// characters of a 32 character string become byte 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use opencensus::trace::TraceId;
    ///
    /// assert!(TraceId::from_hex("42").is_ok());
    /// assert!(TraceId::from_hex("58406520a006649127e371903a2de979").is_ok());
    ///
    /// assert!(TraceId::from_hex("not_hex").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ParseIntError> {
        u128::from_str_radix(hex, 16).map(TraceId::from)
    }
}

impl From<u128> for TraceId {
    fn from(value: u128) -> Self {
        TraceId(value.to_be_bytes())
    }
}

impl From<[u8; 16]> for TraceId {
    fn from(bytes: [u8; 16]) -> Self {
        TraceId(bytes)
    }
}

impl fmt::Debug for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{:02x}", b))
    }
}

/// An 8-byte value which identifies a given span.
///
/// The id is valid if it contains at least one non-zero byte.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub struct SpanId([u8; 8]);

impl SpanId {
    /// Size of a span id in bytes.
    pub const SIZE: usize = 8;

    /// Invalid span id
    pub const INVALID: SpanId = SpanId([0; 8]);

    /// Create a span id from its representation as a byte array.
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        SpanId(bytes)
    }

    /// Return the representation of this span id as a byte array.
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0
    }

    /// Returns `true` if at least one byte is non-zero.
    pub fn is_valid(&self) -> bool {
        *self != SpanId::INVALID
    }

    /// Converts a string in base 16 to a span id.
    ///
    /// # Examples
    ///
    /// ```
    /// use opencensus::trace::SpanId;
    ///
    /// assert!(SpanId::from_hex("42").is_ok());
    /// assert!(SpanId::from_hex("58406520a0066491").is_ok());
    ///
    /// assert!(SpanId::from_hex("not_hex").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ParseIntError> {
        u64::from_str_radix(hex, 16).map(SpanId::from)
    }
}

impl From<u64> for SpanId {
    fn from(value: u64) -> Self {
        SpanId(value.to_be_bytes())
    }
}

impl fmt::Debug for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{:02x}", b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    fn trace_id_test_data() -> Vec<(TraceId, &'static str, [u8; 16])> {
        vec![
            (TraceId::from(0), "00000000000000000000000000000000", [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            (TraceId::from(42), "0000000000000000000000000000002a", [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 42]),
            (TraceId::from(126642714606581564793456114182061442190), "5f467fe7bf42676c05e20ba4a90e448e", [95, 70, 127, 231, 191, 66, 103, 108, 5, 226, 11, 164, 169, 14, 68, 142])
        ]
    }

    #[rustfmt::skip]
    fn span_id_test_data() -> Vec<(SpanId, &'static str, [u8; 8])> {
        vec![
            (SpanId::from(0), "0000000000000000", [0, 0, 0, 0, 0, 0, 0, 0]),
            (SpanId::from(42), "000000000000002a", [0, 0, 0, 0, 0, 0, 0, 42]),
            (SpanId::from(5508496025762705295), "4c721bf33e3caf8f", [76, 114, 27, 243, 62, 60, 175, 143])
        ]
    }

    #[test]
    fn test_trace_id() {
        for (id, hex, bytes) in trace_id_test_data() {
            assert_eq!(format!("{}", id), hex);
            assert_eq!(format!("{:?}", id), hex);
            assert_eq!(id.to_bytes(), bytes);
            assert_eq!(id.as_bytes(), &bytes);

            assert_eq!(id, TraceId::from_hex(hex).unwrap());
            assert_eq!(id, TraceId::from_bytes(bytes));
        }
    }

    #[test]
    fn test_span_id() {
        for (id, hex, bytes) in span_id_test_data() {
            assert_eq!(format!("{}", id), hex);
            assert_eq!(format!("{:?}", id), hex);
            assert_eq!(id.to_bytes(), bytes);

            assert_eq!(id, SpanId::from_hex(hex).unwrap());
            assert_eq!(id, SpanId::from_bytes(bytes));
        }
    }

    #[test]
    fn invalid_ids() {
        assert!(!TraceId::INVALID.is_valid());
        assert!(TraceId::from(1).is_valid());
        assert!(!SpanId::INVALID.is_valid());
        assert!(SpanId::from(1).is_valid());
    }

    #[test]
    fn trace_flags_sampled_bit() {
        assert!(!TraceFlags::default().is_sampled());
        assert!(TraceFlags::SAMPLED.is_sampled());
        assert!(TraceFlags::new(0xff).is_sampled());

        let flags = TraceFlags::new(0x02).with_sampled(true);
        assert_eq!(flags.to_u8(), 0x03);
        assert_eq!(flags.with_sampled(false).to_u8(), 0x02);
    }
}
