//! Farb-Kommandos und Helligkeits-Skalierung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Symbolisches Farb-Kommando für die Target-Strips
///
/// Geschlossene Tabelle: jedes Kommando hat eine feste RGB-Farbe.
/// Einige Varianten sind semantische Aliase auf dieselbe Farbe
/// (z.B. `GbRed` für das Spieler-Rot, `OffMiss` für einen Fehlschuss).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorCommand {
    Off,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta,
    Blue,
    GbRed,
    GbBlue,
    White,
    GreenActive,
    OffMiss,
    RedAllTarget,
    Orange,
}

impl ColorCommand {
    /// Liefert die RGB-Farbe des Kommandos
    pub const fn color(self) -> RGB8 {
        match self {
            Self::Off | Self::OffMiss => RGB8 { r: 0x00, g: 0x00, b: 0x00 },
            Self::Green | Self::GreenActive => RGB8 { r: 0x00, g: 0xff, b: 0x00 },
            Self::Red | Self::GbRed | Self::RedAllTarget => RGB8 { r: 0xff, g: 0x00, b: 0x00 },
            Self::Yellow => RGB8 { r: 0xff, g: 0xff, b: 0x00 },
            Self::Cyan => RGB8 { r: 0x00, g: 0xff, b: 0xff },
            Self::Magenta => RGB8 { r: 0xff, g: 0x00, b: 0xff },
            Self::Blue | Self::GbBlue => RGB8 { r: 0x00, g: 0x00, b: 0xff },
            Self::White => RGB8 { r: 0xff, g: 0xff, b: 0xff },
            Self::Orange => RGB8 { r: 0xff, g: 0x26, b: 0x00 },
        }
    }
}

/// Video-Skalierung eines 8-bit Kanals (0-255 = 0.0-1.0)
///
/// Rundet so, dass 0 immer exakt 0 ergibt, 255 den Eingangswert
/// unverändert lässt und kein Zwischenwert den Eingang übersteigt.
#[inline]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16 + 127) / 255) as u8
}

/// Skaliert alle drei Kanäle einer Farbe mit `scale8_video`
#[inline]
pub const fn scale_color(color: RGB8, scale: u8) -> RGB8 {
    RGB8 {
        r: scale8_video(color.r, scale),
        g: scale8_video(color.g, scale),
        b: scale8_video(color.b, scale),
    }
}
