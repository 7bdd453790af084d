// palette.rs - Colors and the panel label table

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_hex(0xffffff);

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// One labeled panel: identifier, text drawn on the card, card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelEntry {
    pub name: &'static str,
    pub text: &'static str,
    pub color: Rgb,
}

impl PanelEntry {
    pub const fn new(name: &'static str, text: &'static str, color: u32) -> Self {
        Self { name, text, color: Rgb::from_hex(color) }
    }
}

pub const DEFAULT_PANELS: &[PanelEntry] = &[
    PanelEntry::new("HTML", "HTML", 0xd86c6c),
    PanelEntry::new("CSS", "CSS", 0x6c8fd8),
    PanelEntry::new("JS", "JS", 0xd8c86c),
    PanelEntry::new("PHP", "PHP", 0x9c7fb8),
    PanelEntry::new("MySQL", "MySQL", 0x6c9fb8),
    PanelEntry::new("Python", "Python", 0x6ca5d8),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        let c = Rgb::from_hex(0x9c7fb8);
        assert_eq!((c.r, c.g, c.b), (0x9c, 0x7f, 0xb8));
        assert_eq!(c.to_hex(), 0x9c7fb8);
    }

    #[test]
    fn default_table_has_six_distinct_names() {
        assert_eq!(DEFAULT_PANELS.len(), 6);
        for (i, a) in DEFAULT_PANELS.iter().enumerate() {
            for b in &DEFAULT_PANELS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
