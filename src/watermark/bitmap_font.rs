//! Embedded 5x7 bitmap font backing the built-in font ramp.
//!
//! Ramp index `n` draws each font pixel as a `ceil(n / 2)` square block, so
//! fonts 1-2 are 5x7 cells, 3-4 are 10x14 and 5 is 15x21. Characters without
//! a glyph are drawn as `?`.

use image::{Rgba, RgbaImage};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

#[rustfmt::skip]
const GLYPHS: &[(char, [u8; 7])] = &[
    // Each row is 5 bits (LSB on the right): bit 4..0
    (' ', [0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000]),
    ('!', [0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100]),
    ('#', [0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010]),
    ('%', [0b11000,0b11001,0b00010,0b00100,0b01000,0b10011,0b00011]),
    ('&', [0b01100,0b10010,0b10100,0b01000,0b10101,0b10010,0b01101]),
    ('(', [0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010]),
    (')', [0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000]),
    ('+', [0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000]),
    (',', [0b00000,0b00000,0b00000,0b00000,0b01100,0b00100,0b01000]),
    ('-', [0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000]),
    ('.', [0b00000,0b00000,0b00000,0b00000,0b00000,0b01100,0b01100]),
    ('/', [0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000]),
    // Digits
    ('0', [0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110]),
    ('1', [0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110]),
    ('2', [0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111]),
    ('3', [0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110]),
    ('4', [0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010]),
    ('5', [0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110]),
    ('6', [0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110]),
    ('7', [0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000]),
    ('8', [0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110]),
    ('9', [0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100]),
    (':', [0b00000,0b01100,0b01100,0b00000,0b01100,0b01100,0b00000]),
    ('=', [0b00000,0b00000,0b11111,0b00000,0b11111,0b00000,0b00000]),
    ('?', [0b01110,0b10001,0b00001,0b00010,0b00100,0b00000,0b00100]),
    ('@', [0b01110,0b10001,0b00001,0b01101,0b10101,0b10101,0b01110]),
    // Upper case
    ('A', [0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001]),
    ('B', [0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110]),
    ('C', [0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110]),
    ('D', [0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100]),
    ('E', [0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111]),
    ('F', [0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000]),
    ('G', [0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111]),
    ('H', [0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001]),
    ('I', [0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110]),
    ('J', [0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100]),
    ('K', [0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001]),
    ('L', [0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111]),
    ('M', [0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001]),
    ('N', [0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001]),
    ('O', [0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110]),
    ('P', [0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000]),
    ('Q', [0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101]),
    ('R', [0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001]),
    ('S', [0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110]),
    ('T', [0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100]),
    ('U', [0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110]),
    ('V', [0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100]),
    ('W', [0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010]),
    ('X', [0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001]),
    ('Y', [0b10001,0b10001,0b10001,0b01010,0b00100,0b00100,0b00100]),
    ('Z', [0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111]),
    ('_', [0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111]),
    // Lower case
    ('a', [0b00000,0b00000,0b01110,0b00001,0b01111,0b10001,0b01111]),
    ('b', [0b10000,0b10000,0b10110,0b11001,0b10001,0b10001,0b11110]),
    ('c', [0b00000,0b00000,0b01110,0b10000,0b10000,0b10001,0b01110]),
    ('d', [0b00001,0b00001,0b01101,0b10011,0b10001,0b10001,0b01111]),
    ('e', [0b00000,0b00000,0b01110,0b10001,0b11111,0b10000,0b01110]),
    ('f', [0b00110,0b01001,0b01000,0b11100,0b01000,0b01000,0b01000]),
    ('g', [0b00000,0b01111,0b10001,0b10001,0b01111,0b00001,0b01110]),
    ('h', [0b10000,0b10000,0b10110,0b11001,0b10001,0b10001,0b10001]),
    ('i', [0b00100,0b00000,0b01100,0b00100,0b00100,0b00100,0b01110]),
    ('j', [0b00010,0b00000,0b00110,0b00010,0b00010,0b10010,0b01100]),
    ('k', [0b10000,0b10000,0b10010,0b10100,0b11000,0b10100,0b10010]),
    ('l', [0b01100,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110]),
    ('m', [0b00000,0b00000,0b11010,0b10101,0b10101,0b10001,0b10001]),
    ('n', [0b00000,0b00000,0b10110,0b11001,0b10001,0b10001,0b10001]),
    ('o', [0b00000,0b00000,0b01110,0b10001,0b10001,0b10001,0b01110]),
    ('p', [0b00000,0b00000,0b11110,0b10001,0b11110,0b10000,0b10000]),
    ('q', [0b00000,0b00000,0b01101,0b10011,0b01111,0b00001,0b00001]),
    ('r', [0b00000,0b00000,0b10110,0b11001,0b10000,0b10000,0b10000]),
    ('s', [0b00000,0b00000,0b01110,0b10000,0b01110,0b00001,0b11110]),
    ('t', [0b01000,0b01000,0b11100,0b01000,0b01000,0b01001,0b00110]),
    ('u', [0b00000,0b00000,0b10001,0b10001,0b10001,0b10011,0b01101]),
    ('v', [0b00000,0b00000,0b10001,0b10001,0b10001,0b01010,0b00100]),
    ('w', [0b00000,0b00000,0b10001,0b10001,0b10101,0b10101,0b01010]),
    ('x', [0b00000,0b00000,0b10001,0b01010,0b00100,0b01010,0b10001]),
    ('y', [0b00000,0b00000,0b10001,0b10001,0b01111,0b00001,0b01110]),
    ('z', [0b00000,0b00000,0b11111,0b00010,0b00100,0b01000,0b11111]),
    ('~', [0b00000,0b00000,0b01000,0b10101,0b00010,0b00000,0b00000]),
];

const FALLBACK: char = '?';

fn glyph_rows(ch: char) -> [u8; 7] {
    GLYPHS
        .iter()
        .find(|(c, _)| *c == ch)
        .or_else(|| GLYPHS.iter().find(|(c, _)| *c == FALLBACK))
        .map(|(_, rows)| *rows)
        .unwrap_or_default()
}

/// Pixel block size for a ramp index.
pub fn scale_for(index: u8) -> u32 {
    (u32::from(index.max(1)) + 1) / 2
}

/// Size of `text` rendered at `scale`: each glyph advances 6 blocks
/// (5 + 1 spacing), without trailing spacing.
pub fn measure(text: &str, scale: u32) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, GLYPH_HEIGHT * scale);
    }

    let advance = (GLYPH_WIDTH + 1) * scale;
    (count * advance - scale, GLYPH_HEIGHT * scale)
}

/// Render `text` into a new transparent layer.
pub fn render(text: &str, scale: u32, color: Rgba<u8>) -> RgbaImage {
    let (width, height) = measure(text, scale);
    let mut layer = RgbaImage::new(width.max(1), height.max(1));
    let advance = (GLYPH_WIDTH + 1) * scale;

    for (index, ch) in text.chars().enumerate() {
        draw_char(&mut layer, index as u32 * advance, ch, color, scale);
    }

    layer
}

fn draw_char(layer: &mut RgbaImage, x: u32, ch: char, color: Rgba<u8>, scale: u32) {
    let (w, h) = layer.dimensions();

    for (row_idx, row_bits) in glyph_rows(ch).iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if (row_bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                continue;
            }

            let px = x + col * scale;
            let py = row_idx as u32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    let (sx, sy) = (px + dx, py + dy);
                    if sx < w && sy < h {
                        layer.put_pixel(sx, sy, color);
                    }
                }
            }
        }
    }
}
