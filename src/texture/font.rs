// font.rs - 5x7 bitmap glyphs
//
// Rows are top to bottom, bit 4 is the leftmost column. Rows 0-6 sit on the
// baseline; rows 7-8 hold descenders (g j p q y).

pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;
pub const GLYPH_ROWS: usize = 9;
pub const ADVANCE: u32 = GLYPH_W + 1;

pub type Glyph = [u8; GLYPH_ROWS];

const fn g7(r: [u8; 7]) -> Glyph {
    [r[0], r[1], r[2], r[3], r[4], r[5], r[6], 0, 0]
}

const fn g9(r: [u8; 9]) -> Glyph {
    r
}

const UNKNOWN: Glyph = g7([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]);

pub fn glyph(c: char) -> Glyph {
    match c {
        ' ' => [0; GLYPH_ROWS],
        '+' => g7([0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
        '#' => g7([0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010]),
        '.' => g7([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
        '-' => g7([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),

        '0' => g7([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => g7([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        '2' => g7([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        '3' => g7([0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        '4' => g7([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => g7([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => g7([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => g7([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => g7([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => g7([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),

        'A' => g7([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'B' => g7([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'C' => g7([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'D' => g7([0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
        'E' => g7([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'F' => g7([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
        'G' => g7([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
        'H' => g7([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'I' => g7([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'J' => g7([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
        'K' => g7([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
        'L' => g7([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => g7([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => g7([0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
        'O' => g7([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => g7([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'Q' => g7([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
        'R' => g7([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => g7([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => g7([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => g7([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'V' => g7([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'W' => g7([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
        'X' => g7([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
        'Y' => g7([0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
        'Z' => g7([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),

        'a' => g7([0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]),
        'b' => g7([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110]),
        'c' => g7([0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]),
        'd' => g7([0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111]),
        'e' => g7([0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]),
        'f' => g7([0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000]),
        'g' => g9([0b00000, 0b00000, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
        'h' => g7([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
        'i' => g7([0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'j' => g9([0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
        'k' => g7([0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010]),
        'l' => g7([0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'm' => g7([0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001]),
        'n' => g7([0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
        'o' => g7([0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
        'p' => g9([0b00000, 0b00000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000]),
        'q' => g9([0b00000, 0b00000, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001]),
        'r' => g7([0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]),
        's' => g7([0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110]),
        't' => g7([0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110]),
        'u' => g7([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101]),
        'v' => g7([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'w' => g7([0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010]),
        'x' => g7([0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
        'y' => g9([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
        'z' => g7([0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111]),

        _ => UNKNOWN,
    }
}

/// Is cell (col, row) of the glyph lit?
#[inline]
pub fn lit(g: &Glyph, col: u32, row: u32) -> bool {
    (row as usize) < GLYPH_ROWS && col < GLYPH_W && g[row as usize] & (1u8 << (GLYPH_W - 1 - col)) != 0
}

/// Width in cells of a line of text, without trailing spacing.
pub fn line_cells(text: &str) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 { 0 } else { n * ADVANCE - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_chars_fall_back() {
        assert_eq!(glyph('~'), UNKNOWN);
        assert_ne!(glyph('A'), UNKNOWN);
    }

    #[test]
    fn descenders_only_on_descending_letters() {
        for c in ['g', 'j', 'p', 'q', 'y'] {
            let g = glyph(c);
            assert!(g[7] != 0 || g[8] != 0, "{c} should descend");
        }
        for c in "HTMLCSSJPhtmlsq".chars().filter(|c| !"gjpqy".contains(*c)) {
            let g = glyph(c);
            assert_eq!((g[7], g[8]), (0, 0), "{c} should sit on the baseline");
        }
    }

    #[test]
    fn line_width_counts_gaps() {
        assert_eq!(line_cells(""), 0);
        assert_eq!(line_cells("J"), 5);
        assert_eq!(line_cells("JS"), 11);
    }

    #[test]
    fn lit_reads_leftmost_bit_first() {
        let l = glyph('L');
        assert!(lit(&l, 0, 0));
        assert!(!lit(&l, 4, 0));
        assert!(lit(&l, 4, 6));
        assert!(!lit(&l, 5, 6));
    }
}
