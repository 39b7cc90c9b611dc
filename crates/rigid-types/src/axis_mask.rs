//! Selection of rigid-body degrees of freedom.

/// A bitmask over the six rigid-body degrees of freedom.
///
/// | bit | constant | degree of freedom |
/// |-----|----------|-------------------|
/// | 1   | [`AxisMask::X`]  | translation along x |
/// | 2   | [`AxisMask::Y`]  | translation along y |
/// | 4   | [`AxisMask::Z`]  | translation along z |
/// | 8   | [`AxisMask::WX`] | rotation about x |
/// | 16  | [`AxisMask::WY`] | rotation about y |
/// | 32  | [`AxisMask::WZ`] | rotation about z |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisMask(u8);

impl AxisMask {
    /// No degree of freedom.
    pub const NONE: Self = Self(0);
    /// Translation along x.
    pub const X: Self = Self(1);
    /// Translation along y.
    pub const Y: Self = Self(2);
    /// Translation along z.
    pub const Z: Self = Self(4);
    /// Rotation about x.
    pub const WX: Self = Self(8);
    /// Rotation about y.
    pub const WY: Self = Self(16);
    /// Rotation about z.
    pub const WZ: Self = Self(32);
    /// Planar translation.
    pub const XY: Self = Self(3);
    /// All translations.
    pub const VEL: Self = Self(7);
    /// All rotations.
    pub const ROT: Self = Self(56);
    /// Every degree of freedom.
    pub const ALL: Self = Self(63);

    /// Build a mask from raw bits, silently dropping bits above the six known ones.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether at least one bit of `other` is set in `self`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether no bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The translation bits of the mask.
    #[inline]
    pub const fn translation(self) -> Self {
        Self(self.0 & Self::VEL.0)
    }

    /// The rotation bits of the mask.
    #[inline]
    pub const fn rotation(self) -> Self {
        Self(self.0 & Self::ROT.0)
    }
}

impl std::ops::BitOr for AxisMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for AxisMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for AxisMask {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::BitAndAssign for AxisMask {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::Not for AxisMask {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0 & Self::ALL.0)
    }
}
