//! Integration Tests für den Strip-Protokoll-Treiber
//!
//! Diese Tests laufen auf dem Host (x86_64) und zeichnen mit einer
//! Mock-Leitung jeden Pegel-Wechsel und jedes Delay auf. Damit lässt
//! sich die Bit-Kodierung gegen von Hand berechnete Sequenzen prüfen.

use rgb::RGB8;
use target_core::{
    ColorCommand, ConfigError, HitFeedback, PulseTiming, Strip, StripDriver, StripError, StripLine,
    TargetMap, TargetStrip, WS2812B_TIMING,
};

// ============================================================================
// Mock Strip Line
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    High,
    Low,
    DelayNs(u32),
    LockEnter,
    LockExit,
}

/// Mock-Leitung: zeichnet alle Operationen in Reihenfolge auf
#[derive(Default)]
pub struct RecordingLine {
    pub events: Vec<LineEvent>,
}

impl StripLine for RecordingLine {
    fn set_high(&mut self) {
        self.events.push(LineEvent::High);
    }

    fn set_low(&mut self) {
        self.events.push(LineEvent::Low);
    }

    fn delay_ns(&mut self, ns: u32) {
        self.events.push(LineEvent::DelayNs(ns));
    }

    fn with_lock<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.events.push(LineEvent::LockEnter);
        let result = f(self);
        self.events.push(LineEvent::LockExit);
        result
    }
}

/// Erwartete Ereignisse für ein einzelnes Bit
fn bit_events(bit: bool, timing: &PulseTiming) -> [LineEvent; 4] {
    if bit {
        [
            LineEvent::High,
            LineEvent::DelayNs(timing.t1h_ns),
            LineEvent::Low,
            LineEvent::DelayNs(timing.t1l_ns),
        ]
    } else {
        [
            LineEvent::High,
            LineEvent::DelayNs(timing.t0h_ns),
            LineEvent::Low,
            LineEvent::DelayNs(timing.t0l_ns),
        ]
    }
}

/// Erwartete Ereignis-Folge für einen kompletten Frame
fn frame_events(pixels: &[RGB8], timing: &PulseTiming) -> Vec<LineEvent> {
    let mut events = vec![LineEvent::LockEnter];
    for px in pixels {
        // Sende-Reihenfolge: Grün, Rot, Blau, jeweils MSB zuerst
        let code = (u32::from(px.g) << 16) | (u32::from(px.r) << 8) | u32::from(px.b);
        for i in (0..24).rev() {
            events.extend_from_slice(&bit_events(code & (1 << i) != 0, timing));
        }
    }
    events.push(LineEvent::DelayNs(timing.reset_us * 1000));
    events.push(LineEvent::LockExit);
    events
}

fn target_strip(length: usize, brightness: u8) -> TargetStrip<RecordingLine> {
    let mut strip = Strip::new(length, 8, brightness);
    strip.init().unwrap();
    TargetStrip::new(strip, StripDriver::new(RecordingLine::default()))
}

// ============================================================================
// Tests: Bit-Kodierung
// ============================================================================

#[test]
fn test_single_pixel_bit_sequence() {
    let mut t = target_strip(1, 255);
    t.strip
        .set_pixel(0, RGB8 { r: 0x12, g: 0x34, b: 0x56 })
        .unwrap();

    t.driver.flush(&t.strip).unwrap();

    let expected = frame_events(&[RGB8 { r: 0x12, g: 0x34, b: 0x56 }], &WS2812B_TIMING);
    assert_eq!(t.driver_events(), expected);
}

#[test]
fn test_green_byte_transmits_first() {
    // Reines Rot: das erste gesendete Byte (Grün) besteht aus 0-Bits,
    // das zweite (Rot) aus 1-Bits
    let mut t = target_strip(1, 255);
    t.strip
        .set_pixel(0, RGB8 { r: 0xff, g: 0x00, b: 0x00 })
        .unwrap();

    t.driver.flush(&t.strip).unwrap();
    let events = t.driver_events();

    let zero = bit_events(false, &WS2812B_TIMING);
    let one = bit_events(true, &WS2812B_TIMING);
    // Ereignis 0 ist LockEnter, danach 4 Ereignisse pro Bit
    for bit in 0..8 {
        assert_eq!(events[1 + bit * 4..1 + (bit + 1) * 4], zero);
    }
    for bit in 8..16 {
        assert_eq!(events[1 + bit * 4..1 + (bit + 1) * 4], one);
    }
}

#[test]
fn test_pixels_transmit_in_index_order() {
    let mut t = target_strip(3, 255);
    let colors = [
        RGB8 { r: 1, g: 0, b: 0 },
        RGB8 { r: 0, g: 2, b: 0 },
        RGB8 { r: 0, g: 0, b: 3 },
    ];
    for (i, c) in colors.into_iter().enumerate() {
        t.strip.set_pixel(i, c).unwrap();
    }

    t.driver.flush(&t.strip).unwrap();
    assert_eq!(t.driver_events(), frame_events(&colors, &WS2812B_TIMING));
}

// ============================================================================
// Tests: flush-Verhalten
// ============================================================================

#[test]
fn test_flush_is_read_only_and_repeatable() {
    let mut t = target_strip(2, 255);
    t.strip.fill(0, 2, RGB8 { r: 7, g: 8, b: 9 }).unwrap();
    let pixels_before: Vec<RGB8> = t.strip.pixels().unwrap().to_vec();

    t.driver.flush(&t.strip).unwrap();
    let first_frame = t.driver_events();
    t.driver.flush(&t.strip).unwrap();
    let both_frames = t.driver_events();

    // Buffer unverändert, zweiter Frame identisch zum ersten
    assert_eq!(t.strip.pixels().unwrap(), pixels_before.as_slice());
    assert_eq!(both_frames.len(), first_frame.len() * 2);
    assert_eq!(&both_frames[..first_frame.len()], first_frame.as_slice());
    assert_eq!(&both_frames[first_frame.len()..], first_frame.as_slice());
}

#[test]
fn test_flush_unallocated_emits_nothing() {
    let strip = Strip::new(2, 8, 255);
    let mut driver = StripDriver::new(RecordingLine::default());

    assert_eq!(driver.flush(&strip), Err(StripError::Unallocated));
    assert!(driver.line().events.is_empty());
}

#[test]
fn test_whole_frame_inside_one_lock() {
    let mut t = target_strip(4, 255);
    t.strip.fill(0, 4, RGB8 { r: 1, g: 2, b: 3 }).unwrap();
    t.driver.flush(&t.strip).unwrap();

    let events = t.driver_events();
    let enters = events.iter().filter(|e| **e == LineEvent::LockEnter).count();
    let exits = events.iter().filter(|e| **e == LineEvent::LockExit).count();

    assert_eq!(enters, 1);
    assert_eq!(exits, 1);
    assert_eq!(events.first(), Some(&LineEvent::LockEnter));
    assert_eq!(events.last(), Some(&LineEvent::LockExit));
    // Reset-Delay liegt noch innerhalb der Sperre
    assert_eq!(
        events[events.len() - 2],
        LineEvent::DelayNs(WS2812B_TIMING.reset_us * 1000)
    );
}

// ============================================================================
// Tests: Target-Map und Treffer-Feedback
// ============================================================================

#[test]
fn test_target_map_validation() {
    let uninitialized = TargetStrip::new(
        Strip::new(4, 9, 255),
        StripDriver::new(RecordingLine::default()),
    );
    let map = TargetMap::new([target_strip(4, 255), uninitialized]);

    assert_eq!(
        map.validate(),
        Err(ConfigError::InvalidStrip {
            target: 1,
            cause: StripError::Unallocated,
        })
    );
}

#[test]
fn test_dispatch_on_unmapped_target_is_rejected() {
    let mut map = TargetMap::new([target_strip(4, 255)]);
    assert!(matches!(map.get_mut(7), Err(StripError::OutOfBounds)));
}

#[test]
fn test_hit_feedback_flushes_each_phase_and_ends_lit() {
    let mut t = target_strip(4, 255);
    let feedback = HitFeedback::new(ColorCommand::Red, 2, 35);

    for phase in feedback.phases() {
        t.show(phase.color).unwrap();
    }

    let frames = t
        .driver_events()
        .iter()
        .filter(|e| **e == LineEvent::LockEnter)
        .count();
    assert_eq!(frames, feedback.phase_count());
    // Nach der letzten Phase steht die Treffer-Farbe im Buffer
    for px in t.strip.pixels().unwrap() {
        assert_eq!(*px, ColorCommand::Red.color());
    }
}

// ============================================================================
// Helper
// ============================================================================

trait DriverEvents {
    fn driver_events(&self) -> Vec<LineEvent>;
}

impl DriverEvents for TargetStrip<RecordingLine> {
    fn driver_events(&self) -> Vec<LineEvent> {
        self.driver.line().events.clone()
    }
}
