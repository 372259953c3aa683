//! Wall-clock readings and the eight-glyph row a layer displays.
//!
//! A layer's digits are fixed at creation, so everything here is plain data:
//! `ClockReading` captures h/m/s once, `Glyph` is one slot of the row.

use chrono::{Local, Timelike};

/// Digit slot width in em.
pub const DIGIT_SLOT_EM: f32 = 0.62;
/// Separator slot width in em.
pub const SEPARATOR_SLOT_EM: f32 = 0.34;

/// Number of glyph slots in a rendered row: `HH:MM:SS`.
pub const GLYPH_COUNT: usize = 8;

/// One wall-clock sample, 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockReading {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Zero-padded `HH:MM:SS` split into fixed slots.
    pub fn glyphs(&self) -> [Glyph; GLYPH_COUNT] {
        let h = format!("{:02}", self.hours);
        let m = format!("{:02}", self.minutes);
        let s = format!("{:02}", self.seconds);
        let mut digits = h.chars().chain(m.chars()).chain(s.chars());
        let mut next = || Glyph::Digit(digits.next().unwrap_or('0'));

        [
            next(),
            next(),
            Glyph::Separator,
            next(),
            next(),
            Glyph::Separator,
            next(),
            next(),
        ]
    }
}

impl std::fmt::Display for ClockReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// A single fixed-width slot of the clock row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Digit(char),
    Separator,
}

impl Glyph {
    pub fn as_char(&self) -> char {
        match self {
            Glyph::Digit(c) => *c,
            Glyph::Separator => ':',
        }
    }

    /// Slot width in em. Independent of which digit occupies the slot.
    pub fn slot_em(&self) -> f32 {
        match self {
            Glyph::Digit(_) => DIGIT_SLOT_EM,
            Glyph::Separator => SEPARATOR_SLOT_EM,
        }
    }
}

/// Horizontal placement of a glyph slot, in pixels, relative to the row centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSlot {
    pub glyph: Glyph,
    pub center_x: f32,
    pub width: f32,
}

/// Lay out a row of glyphs into fixed slots centred on x = 0.
pub fn layout_slots(glyphs: &[Glyph; GLYPH_COUNT], font_size: f32) -> [GlyphSlot; GLYPH_COUNT] {
    let total: f32 = glyphs.iter().map(|g| g.slot_em() * font_size).sum();
    let mut cursor = -total * 0.5;

    (*glyphs).map(|glyph| {
        let width = glyph.slot_em() * font_size;
        let slot = GlyphSlot {
            glyph,
            center_x: cursor + width * 0.5,
            width,
        };
        cursor += width;
        slot
    })
}

/// Source of "now" for the tick loop.
pub trait TimeSource {
    fn now(&self) -> ClockReading;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> ClockReading {
        let now = Local::now();
        ClockReading::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
    }
}

/// Clock frozen at a given reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockReading);

impl TimeSource for FixedClock {
    fn now(&self) -> ClockReading {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_zero_padded() {
        let glyphs = FixedClock(ClockReading::new(9, 5, 7)).now().glyphs();
        let chars: Vec<char> = glyphs.iter().map(Glyph::as_char).collect();
        assert_eq!(chars, vec!['0', '9', ':', '0', '5', ':', '0', '7']);
        assert_eq!(glyphs[2], Glyph::Separator);
        assert_eq!(glyphs[5], Glyph::Separator);
    }

    #[test]
    fn test_glyphs_24_hour() {
        let chars: String = ClockReading::new(23, 59, 58).glyphs().iter().map(Glyph::as_char).collect();
        assert_eq!(chars, "23:59:58");
    }

    #[test]
    fn test_display() {
        assert_eq!(ClockReading::new(0, 0, 3).to_string(), "00:00:03");
    }

    #[test]
    fn test_row_width_stable_across_digits() {
        let a = layout_slots(&ClockReading::new(11, 11, 11).glyphs(), 100.0);
        let b = layout_slots(&ClockReading::new(8, 0, 0).glyphs(), 100.0);
        for (sa, sb) in a.iter().zip(b.iter()) {
            assert_eq!(sa.center_x, sb.center_x);
            assert_eq!(sa.width, sb.width);
        }
    }

    #[test]
    fn test_row_centered() {
        let slots = layout_slots(&ClockReading::new(12, 34, 56).glyphs(), 80.0);
        let left = slots[0].center_x - slots[0].width * 0.5;
        let right = slots[7].center_x + slots[7].width * 0.5;
        assert!((left + right).abs() < 1e-3);
        assert!(slots.windows(2).all(|w| w[0].center_x < w[1].center_x));
    }
}
