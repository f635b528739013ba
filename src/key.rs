/// An 8-bit XOR key.
///
/// Any integer is accepted via [`Key::from_raw`] and wrapped into `0..=255`:
/// two's-complement truncation is exactly `mod 256`, so `-1` becomes `255`
/// and `k`, `k + 256`, `k - 256` all name the same key. A non-integral key
/// simply does not type-check.
///
/// Key `0` is the identity: XOR with zero copies the buffer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(u8);

impl Key {
    /// The identity key — transforms every buffer to itself.
    pub const IDENTITY: Key = Key(0);

    /// Key from an exact byte value.
    #[inline]
    pub const fn new(byte: u8) -> Self {
        Key(byte)
    }

    /// Key from any integer, wrapped to `0..=255` (`raw mod 256`,
    /// always non-negative: `-1 → 255`).
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Key(raw as u8)
    }

    /// The normalized byte value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Key {
    #[inline]
    fn from(byte: u8) -> Self {
        Key::new(byte)
    }
}

impl From<i64> for Key {
    #[inline]
    fn from(raw: i64) -> Self {
        Key::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_pass_through() {
        assert_eq!(Key::from_raw(0).value(), 0);
        assert_eq!(Key::from_raw(5).value(), 5);
        assert_eq!(Key::from_raw(255).value(), 255);
    }

    #[test]
    fn negative_values_wrap_non_negative() {
        assert_eq!(Key::from_raw(-1).value(), 255);
        assert_eq!(Key::from_raw(-256).value(), 0);
        assert_eq!(Key::from_raw(-257).value(), 255);
    }

    #[test]
    fn values_are_equivalent_mod_256() {
        for k in 0..=255i64 {
            assert_eq!(Key::from_raw(k), Key::from_raw(k + 256));
            assert_eq!(Key::from_raw(k), Key::from_raw(k - 256));
            assert_eq!(Key::from_raw(k), Key::from_raw(k + 256 * 1000));
        }
    }

    #[test]
    fn identity_is_zero() {
        assert_eq!(Key::IDENTITY, Key::new(0));
        assert_eq!(Key::IDENTITY, Key::from_raw(512));
    }

    #[test]
    fn from_impls_agree() {
        assert_eq!(Key::from(200u8), Key::from(200i64));
        assert_eq!(Key::from(-56i64).value(), 200);
    }
}
