//! # State Flags
//!
//! Bitmasks that decide which optional field groups a packet carries.
//!
//! The encoder and the decoder both ask the *same* group predicate
//! ([`CharacterFlags::carries_aim`] and friends) before touching a group.
//! If they ever disagree every byte after the group is misread.
//!
//! **CRITICAL:** Bit positions are a wire contract. New states take an unused
//! bit; existing bits are never moved or reused.

/// Character state flags. Sent as a 16-bit field.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharacterFlags(u16);

impl CharacterFlags {
    /// No state bits set.
    pub const NONE: Self = Self(0);
    /// Character is jumping.
    pub const JUMPING: Self = Self(1 << 0);
    /// Character fired this tick.
    pub const SHOOTING: Self = Self(1 << 1);
    /// Character is aiming.
    pub const AIMING: Self = Self(1 << 2);
    /// Parachute deployed.
    pub const PARACHUTE_OPEN: Self = Self(1 << 3);
    /// Physics-driven body; pitch and roll are sent.
    pub const RAGDOLL: Self = Self(1 << 4);
    /// In melee combat.
    pub const IN_MELEE_COMBAT: Self = Self(1 << 5);
    /// Falling without a parachute.
    pub const IN_FREEFALL: Self = Self(1 << 6);
    /// Behind cover.
    pub const IN_COVER: Self = Self(1 << 7);
    /// Behind low cover.
    pub const IN_LOWER_COVER: Self = Self(1 << 8);
    /// Cover facing left.
    pub const IN_COVER_FACING_LEFT: Self = Self(1 << 9);
    /// Reloading.
    pub const RELOADING: Self = Self(1 << 10);
    /// Sender has a valid aim target.
    pub const HAS_AIM_DATA: Self = Self(1 << 11);
    /// Climbing a ladder.
    pub const ON_LADDER: Self = Self(1 << 12);
    /// Vaulting an obstacle.
    pub const VAULTING: Self = Self(1 << 13);
    /// Entering a vehicle.
    pub const ENTERING_VEHICLE: Self = Self(1 << 14);
    /// Closing a vehicle door.
    pub const CLOSING_VEHICLE_DOOR: Self = Self(1 << 15);

    /// Wraps raw wire bits. Unknown bits are kept.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw wire bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns true if every bit of `flag` is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: Self) -> bool {
        flag.0 != 0 && self.0 & flag.0 == flag.0
    }

    /// Returns true if any bit of `mask` is set.
    #[inline]
    #[must_use]
    pub const fn has_any(self, mask: Self) -> bool {
        self.0 & mask.0 != 0
    }

    /// Returns a copy with `flag` set.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Returns a copy with `flag` cleared.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    /// Returns true if no bits are set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Weapon id and aim point follow the fixed block.
    #[inline]
    #[must_use]
    pub const fn carries_aim(self) -> bool {
        self.has_any(Self::AIMING.with(Self::SHOOTING))
    }

    /// Pitch and roll precede yaw.
    #[inline]
    #[must_use]
    pub const fn carries_pitch_roll(self) -> bool {
        self.has(Self::RAGDOLL)
    }
}

impl std::ops::BitOr for CharacterFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

/// Vehicle occupant flags. Sent as a single byte.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VehicleFlags(u8);

impl VehicleFlags {
    /// No state bits set.
    pub const NONE: Self = Self(0);
    /// Horn held.
    pub const PRESSING_HORN: Self = Self(1 << 0);
    /// Occupant fired this tick.
    pub const SHOOTING: Self = Self(1 << 1);
    /// Siren on.
    pub const SIREN_ACTIVE: Self = Self(1 << 2);
    /// Vehicle destroyed.
    pub const VEHICLE_DEAD: Self = Self(1 << 3);
    /// Occupant aiming (drive-by).
    pub const AIMING: Self = Self(1 << 4);
    /// Occupant is the driver; the dynamics block is sent.
    pub const DRIVER: Self = Self(1 << 5);
    /// Occupant operates a mounted weapon.
    pub const MOUNTED_WEAPON: Self = Self(1 << 6);
    /// Burnout in progress.
    pub const BURNOUT: Self = Self(1 << 7);

    /// Wraps raw wire bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw wire bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every bit of `flag` is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: Self) -> bool {
        flag.0 != 0 && self.0 & flag.0 == flag.0
    }

    /// Returns true if any bit of `mask` is set.
    #[inline]
    #[must_use]
    pub const fn has_any(self, mask: Self) -> bool {
        self.0 & mask.0 != 0
    }

    /// Returns a copy with `flag` set.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Returns a copy with `flag` cleared.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    /// Returns true if no bits are set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Weapon id and aim point follow the flag byte.
    #[inline]
    #[must_use]
    pub const fn carries_aim(self) -> bool {
        self.has_any(Self::AIMING.with(Self::MOUNTED_WEAPON).with(Self::SHOOTING))
    }

    /// Position, rotation, velocity and engine state follow.
    #[inline]
    #[must_use]
    pub const fn carries_dynamics(self) -> bool {
        self.has(Self::DRIVER)
    }
}

impl std::ops::BitOr for VehicleFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}
