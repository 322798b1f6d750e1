//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{HsvColor, RgbColor};

/// Breite eines Farbkreis-Abschnitts (256 / 6, aufgerundet)
const SECTION_WIDTH: u16 = 43;

/// Konvertiert eine HSV-Farbe nach RGB
///
/// 8-Bit Festkomma-Arithmetik: der Farbkreis wird in sechs Abschnitte zu je
/// 43 Schritten geteilt, Multiplikationen werden mit `>> 8` skaliert.
///
/// # Beispiele
///
/// ```
/// # use led_core::{hsv_to_rgb, HsvColor, RgbColor};
/// assert_eq!(hsv_to_rgb(HsvColor::new(0, 255, 255)), RgbColor::RED);
/// assert_eq!(hsv_to_rgb(HsvColor::new(200, 0, 77)), RgbColor::new(77, 77, 77));
/// ```
pub const fn hsv_to_rgb(hsv: HsvColor) -> RgbColor {
    // Grau/Schwarz/Weiß: alle Kanäle = Helligkeit
    if hsv.s == 0 {
        return RgbColor::new(hsv.v, hsv.v, hsv.v);
    }

    // u16 verhindert Überlauf bei den Zwischenprodukten (max. 255 * 255)
    let h = hsv.h as u16;
    let s = hsv.s as u16;
    let v = hsv.v as u16;

    let section = h / SECTION_WIDTH;
    let section_offset = (h - section * SECTION_WIDTH) * 6;

    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * section_offset) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - section_offset)) >> 8))) >> 8) as u8;
    let v = hsv.v;

    match section {
        0 => RgbColor::new(v, t, p),
        1 => RgbColor::new(q, v, p),
        2 => RgbColor::new(p, v, t),
        3 => RgbColor::new(p, q, v),
        4 => RgbColor::new(t, p, v),
        _ => RgbColor::new(v, p, q),
    }
}
