// ---------------------------------------------------------------------------
// Lane model: which 8-bit lane of a packed 32-bit pixel goes where.
//
// A pixel value is read big-endian-in-value: lane 0 sits at bit offset 24,
// lane 3 at bit offset 0. How the value is stored in memory is a separate,
// explicit ByteOrder.
// ---------------------------------------------------------------------------

use core::fmt;

/// One 8-bit lane of a packed pixel, named by the right-shift that selects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Bits 24..32, the most significant lane.
    Bits24,
    /// Bits 16..24.
    Bits16,
    /// Bits 8..16.
    Bits8,
    /// Bits 0..8, the least significant lane.
    Bits0,
}

impl Channel {
    /// Right-shift that brings this lane down to bits 0..8.
    #[inline(always)]
    pub const fn shift(self) -> u32 {
        match self {
            Self::Bits24 => 24,
            Self::Bits16 => 16,
            Self::Bits8 => 8,
            Self::Bits0 => 0,
        }
    }

    /// Lane index counted from the most significant lane (0..4).
    #[inline(always)]
    pub(crate) const fn lane_index(self) -> usize {
        match self {
            Self::Bits24 => 0,
            Self::Bits16 => 1,
            Self::Bits8 => 2,
            Self::Bits0 => 3,
        }
    }
}

/// A shift value other than 0, 8, 16 or 24 was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidShift(pub u32);

impl fmt::Display for InvalidShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid lane shift {}, expected 0, 8, 16 or 24", self.0)
    }
}

impl core::error::Error for InvalidShift {}

impl TryFrom<u32> for Channel {
    type Error = InvalidShift;

    fn try_from(shift: u32) -> Result<Self, Self::Error> {
        match shift {
            24 => Ok(Self::Bits24),
            16 => Ok(Self::Bits16),
            8 => Ok(Self::Bits8),
            0 => Ok(Self::Bits0),
            other => Err(InvalidShift(other)),
        }
    }
}

/// For each output lane (most significant first), the input lane to copy.
///
/// The four entries need not be distinct: repeating a channel duplicates it,
/// leaving one out drops it.
///
/// ```rust
/// use lanemix::{Channel, LanePermutation};
///
/// let p = LanePermutation::ARGB_TO_RGBA;
/// assert_eq!(p.apply(0x11223344), 0x22334411);
/// assert_eq!(
///     LanePermutation::from_shifts(16, 8, 0, 24),
///     Ok(LanePermutation::new(
///         Channel::Bits16,
///         Channel::Bits8,
///         Channel::Bits0,
///         Channel::Bits24,
///     ))
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LanePermutation([Channel; 4]);

impl LanePermutation {
    /// Leaves every pixel unchanged.
    pub const IDENTITY: Self = Self::new(
        Channel::Bits24,
        Channel::Bits16,
        Channel::Bits8,
        Channel::Bits0,
    );

    /// ARGB → RGBA: red moves to the top lane, alpha to the bottom.
    pub const ARGB_TO_RGBA: Self = Self::new(
        Channel::Bits16,
        Channel::Bits8,
        Channel::Bits0,
        Channel::Bits24,
    );

    /// RGBA → ARGB, the inverse of [`Self::ARGB_TO_RGBA`].
    pub const RGBA_TO_ARGB: Self = Self::new(
        Channel::Bits0,
        Channel::Bits24,
        Channel::Bits16,
        Channel::Bits8,
    );

    pub const fn new(s0: Channel, s1: Channel, s2: Channel, s3: Channel) -> Self {
        Self([s0, s1, s2, s3])
    }

    /// Build a permutation from raw shift amounts, rejecting anything outside
    /// `{0, 8, 16, 24}`.
    pub fn from_shifts(s0: u32, s1: u32, s2: u32, s3: u32) -> Result<Self, InvalidShift> {
        Ok(Self::new(
            Channel::try_from(s0)?,
            Channel::try_from(s1)?,
            Channel::try_from(s2)?,
            Channel::try_from(s3)?,
        ))
    }

    /// The source channel of each output lane, most significant first.
    #[inline]
    pub const fn channels(self) -> [Channel; 4] {
        self.0
    }

    /// Swizzle a single pixel value.
    #[inline(always)]
    pub const fn apply(self, v: u32) -> u32 {
        let [s0, s1, s2, s3] = self.0;
        let b0 = (v >> s0.shift()) & 0xFF;
        let b1 = (v >> s1.shift()) & 0xFF;
        let b2 = (v >> s2.shift()) & 0xFF;
        let b3 = (v >> s3.shift()) & 0xFF;
        (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
    }

    /// The permutation equivalent to applying `self` and then `next`.
    pub const fn then(self, next: Self) -> Self {
        let [n0, n1, n2, n3] = next.0;
        Self([
            self.0[n0.lane_index()],
            self.0[n1.lane_index()],
            self.0[n2.lane_index()],
            self.0[n3.lane_index()],
        ])
    }
}

impl Default for LanePermutation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// How a 32-bit pixel value is laid out in byte storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant lane first in memory.
    BigEndian,
    /// Least significant lane first in memory.
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of `u32` on the target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::LittleEndian;
    /// Byte order of `u32` on the target.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::BigEndian;

    /// Memory offset (0..4) of `channel` inside a stored pixel.
    #[inline(always)]
    pub(crate) const fn byte_offset(self, channel: Channel) -> usize {
        match self {
            Self::BigEndian => channel.lane_index(),
            Self::LittleEndian => 3 - channel.lane_index(),
        }
    }

    #[cfg(test)]
    pub(crate) const fn read(self, px: [u8; 4]) -> u32 {
        match self {
            Self::BigEndian => u32::from_be_bytes(px),
            Self::LittleEndian => u32::from_le_bytes(px),
        }
    }
}
