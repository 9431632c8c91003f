/// Perceptual brightness curve: `value² / 255`, truncating.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn gamma(value: u8) -> u8 {
    let value = value as u16;
    (value * value / 255) as u8
}

/// Trail intensity `distance` pixels behind the startup sweep
///
/// The first two pixels behind the head fall off by halves, then the trail
/// fades linearly and never goes fully dark.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn dim_phase(distance: u16) -> u8 {
    if distance < 3 {
        return 255 >> distance;
    }
    if distance >= 39 {
        return 1;
    }
    (40 - distance) as u8
}
