//! Integration Tests für Strip-Buffer und Helligkeits-Skalierung
//!
//! Diese Tests laufen auf dem Host (x86_64)

use rgb::RGB8;
use target_core::{ColorCommand, Strip, StripError, scale8_video};

fn strip(length: usize, brightness: u8) -> Strip {
    let mut s = Strip::new(length, 8, brightness);
    s.init().unwrap();
    s
}

// ============================================================================
// Tests: Helligkeits-Gesetze
// ============================================================================

#[test]
fn test_brightness_zero_always_black() {
    let mut s = strip(4, 0);
    for (i, color) in [
        RGB8 { r: 255, g: 255, b: 255 },
        RGB8 { r: 1, g: 1, b: 1 },
        RGB8 { r: 0xff, g: 0x26, b: 0x00 },
    ]
    .into_iter()
    .enumerate()
    {
        s.set_pixel(i, color).unwrap();
        assert_eq!(s.pixels().unwrap()[i], RGB8 { r: 0, g: 0, b: 0 });
    }
}

#[test]
fn test_brightness_full_reproduces_input() {
    let mut s = strip(4, 255);
    let color = ColorCommand::Orange.color();
    s.set_pixel(0, color).unwrap();
    assert_eq!(s.pixels().unwrap()[0], color);
}

#[test]
fn test_scaling_never_exceeds_input() {
    for brightness in 0u8..=255 {
        for value in [1u8, 0x26, 0x80, 0xff] {
            assert!(scale8_video(value, brightness) <= value);
        }
    }
}

#[test]
fn test_brightness_read_at_write_time() {
    let mut s = strip(2, 255);
    let color = RGB8 { r: 200, g: 100, b: 50 };

    s.set_pixel(0, color).unwrap();
    s.set_brightness(128);
    s.set_pixel(1, color).unwrap();

    // Pixel 0 wurde mit der alten Helligkeit geschrieben und bleibt
    assert_eq!(s.pixels().unwrap()[0], color);
    assert_eq!(s.pixels().unwrap()[1], RGB8 { r: 100, g: 50, b: 25 });
}

// ============================================================================
// Tests: fill-Validierung (ganz oder gar nicht)
// ============================================================================

#[test]
fn test_fill_full_range() {
    let mut s = strip(4, 255);
    s.fill(0, 4, RGB8 { r: 5, g: 6, b: 7 }).unwrap();
    for px in s.pixels().unwrap() {
        assert_eq!(*px, RGB8 { r: 5, g: 6, b: 7 });
    }
}

#[test]
fn test_fill_exceeding_length_leaves_buffer_untouched() {
    let mut s = strip(4, 255);
    s.fill(0, 4, RGB8 { r: 9, g: 9, b: 9 }).unwrap();

    assert_eq!(
        s.fill(3, 2, RGB8 { r: 1, g: 1, b: 1 }),
        Err(StripError::OutOfBounds)
    );
    for px in s.pixels().unwrap() {
        assert_eq!(*px, RGB8 { r: 9, g: 9, b: 9 });
    }
}

#[test]
fn test_fill_zero_length_rejected() {
    let mut s = strip(4, 255);
    assert_eq!(
        s.fill(1, 0, RGB8 { r: 1, g: 1, b: 1 }),
        Err(StripError::ZeroLength)
    );
}

// ============================================================================
// Tests: Buffer-Lifecycle
// ============================================================================

#[test]
fn test_operations_on_unallocated_buffer() {
    let mut s = Strip::new(4, 8, 255);
    assert_eq!(
        s.set_pixel(0, RGB8 { r: 1, g: 2, b: 3 }),
        Err(StripError::Unallocated)
    );
    assert_eq!(
        s.fill(0, 4, RGB8 { r: 1, g: 2, b: 3 }),
        Err(StripError::Unallocated)
    );
    assert_eq!(s.free(), Err(StripError::Unallocated));
}

#[test]
fn test_free_releases_buffer_once() {
    let mut s = strip(4, 255);
    assert!(s.free().is_ok());
    assert_eq!(s.free(), Err(StripError::Unallocated));
}

#[test]
fn test_init_rejects_zero_length() {
    let mut s = Strip::new(0, 8, 255);
    assert_eq!(s.init(), Err(StripError::InvalidLength));
}
