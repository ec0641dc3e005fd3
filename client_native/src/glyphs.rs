//! Seven-segment score digits
//!
//! Scores are drawn from plain rectangles so no font asset is needed.
//! Segments are named clockwise from the top: a, b, c, d, e, f, then the
//! middle bar g.

use game_core::Aabb;
use glam::Vec2;

const SEGMENTS: [[bool; 7]; 10] = [
    // a, b, c, d, e, f, g
    [true, true, true, true, true, true, false],     // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],    // 2
    [true, true, true, true, false, false, true],    // 3
    [false, true, true, false, false, true, true],   // 4
    [true, false, true, true, false, true, true],    // 5
    [true, false, true, true, true, true, true],     // 6
    [true, true, true, false, false, false, false],  // 7
    [true, true, true, true, true, true, true],      // 8
    [true, true, true, true, false, true, true],     // 9
];

const WIDTH_RATIO: f32 = 0.6;
const THICKNESS_RATIO: f32 = 0.12;
const SPACING_RATIO: f32 = 0.25;

/// Lit segments for a decimal digit (values above 9 wrap)
pub fn segments(digit: u8) -> [bool; 7] {
    SEGMENTS[(digit % 10) as usize]
}

/// Rectangles for one digit whose box has its top-left at `origin`
pub fn digit_rects(digit: u8, origin: Vec2, height: f32) -> Vec<Aabb> {
    let w = height * WIDTH_RATIO;
    let t = height * THICKNESS_RATIO;
    let half = height / 2.0;
    let rect = |x: f32, y: f32, sx: f32, sy: f32| {
        Aabb::new(origin + Vec2::new(x, y), origin + Vec2::new(x + sx, y + sy))
    };

    let bars = [
        rect(0.0, 0.0, w, t),                   // a
        rect(w - t, 0.0, t, half),              // b
        rect(w - t, half, t, half),             // c
        rect(0.0, height - t, w, t),            // d
        rect(0.0, half, t, half),               // e
        rect(0.0, 0.0, t, half),                // f
        rect(0.0, half - t / 2.0, w, t),        // g
    ];

    segments(digit)
        .iter()
        .zip(bars)
        .filter(|(lit, _)| **lit)
        .map(|(_, bar)| bar)
        .collect()
}

/// Rectangles for a whole number centred on `center`
pub fn number_rects(value: u32, center: Vec2, height: f32) -> Vec<Aabb> {
    let digits: Vec<u8> = value.to_string().bytes().map(|b| b - b'0').collect();
    let w = height * WIDTH_RATIO;
    let spacing = height * SPACING_RATIO;
    let total = digits.len() as f32 * w + (digits.len() as f32 - 1.0) * spacing;
    let top_left = center - Vec2::new(total / 2.0, height / 2.0);

    digits
        .iter()
        .enumerate()
        .flat_map(|(i, &d)| {
            let origin = top_left + Vec2::new(i as f32 * (w + spacing), 0.0);
            digit_rects(d, origin, height)
        })
        .collect()
}
