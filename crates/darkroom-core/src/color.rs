//! RGB ↔ HSB conversion.
//!
//! Uses the standard computer-graphics hexcone model: hue is split into six
//! 60° sectors chosen by which channel is the maximum, brightness is the
//! maximum channel and saturation is the spread relative to it. All HSB
//! components are normalized to 0.0..=1.0.

use crate::buffer::Rgb;

/// Convert an RGB triple to `(hue, saturation, brightness)`.
///
/// Hue is expressed as a fraction of a full turn (0.0 = red, 1/3 = green,
/// 2/3 = blue). Achromatic colors report a hue of 0.
pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    let brightness = cmax as f32 / 255.0;
    let saturation = if cmax != 0 {
        (cmax - cmin) as f32 / cmax as f32
    } else {
        0.0
    };

    if saturation == 0.0 {
        return (0.0, saturation, brightness);
    }

    let range = (cmax - cmin) as f32;
    let redc = (cmax - r) as f32 / range;
    let greenc = (cmax - g) as f32 / range;
    let bluec = (cmax - b) as f32 / range;

    let mut hue = if r == cmax {
        bluec - greenc
    } else if g == cmax {
        2.0 + redc - bluec
    } else {
        4.0 + greenc - redc
    };
    hue /= 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }

    (hue, saturation, brightness)
}

/// Convert `(hue, saturation, brightness)` back to RGB.
///
/// Only the fractional part of `hue` is used, so any real value maps onto
/// the color wheel. Saturation and brightness are expected in 0.0..=1.0.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Rgb {
    if saturation == 0.0 {
        let v = to_channel(brightness);
        return [v, v, v];
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    // `% 6` folds the rare `h == 6.0` rounding case back onto the red sector.
    let (r, g, b) = match (h as u32) % 6 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    [to_channel(r), to_channel(g), to_channel(b)]
}

/// Scale a 0.0..=1.0 component to 0..=255, rounding half up.
#[inline]
fn to_channel(v: f32) -> u8 {
    // Float-to-int `as` saturates, so slightly out-of-range input still lands in 0..=255.
    (v * 255.0 + 0.5) as u8
}
