// Sampling Task - Piezo-Polling, Trigger-Erkennung und Treffer-Dispatch
use defmt::{info, warn};
use embassy_time::Timer;

use target_core::{
    ColorCommand, ConfigError, HitFeedback, PollOutcome, Strip, StripDriver, StripError, TargetMap,
    TargetStrip,
};

use crate::config::{
    HIT_FLASH_COUNT, HIT_PHASE_DELAY_MS, LED_BRIGHTNESS, LEDS_PER_TARGET, NUM_TARGETS,
    PIEZO_CHANNELS, SAMPLE_INTERVAL_US, SETTLE_WINDOW_SAMPLES, STARTUP_DELAY_MS, STRIP_GPIO_PINS,
    TRIGGER_THRESHOLD,
};
use crate::hal::{GpioStripLine, PiezoAdc};
use crate::{Sampler, TargetMutex, Targets};

/// Baut die Target-Map auf und validiert sie
///
/// Pro Target ein Strip mit `LEDS_PER_TARGET` Pixeln auf der
/// zugehörigen Datenleitung. Ein Fehler hier bedeutet eine kaputte
/// Konfiguration und muss den Start abbrechen (Aufrufer entscheidet).
pub fn init_targets(lines: [GpioStripLine; NUM_TARGETS]) -> Result<Targets, ConfigError> {
    let mut index = 0;
    let targets = lines.map(|line| {
        let strip = Strip::new(LEDS_PER_TARGET, STRIP_GPIO_PINS[index], LED_BRIGHTNESS);
        index += 1;
        TargetStrip::new(strip, StripDriver::new(line))
    });

    let mut map = TargetMap::new(targets);
    for (target, t) in map.iter_mut().enumerate() {
        t.strip
            .init()
            .map_err(|cause| ConfigError::InvalidStrip { target, cause })?;
    }
    map.validate()?;
    Ok(map)
}

/// Treffer-Feedback für ein Target
///
/// Flicker-Muster auf dem ganzen Strip des Targets; blockiert den
/// Aufrufer für die Dauer der Animation. Aus der Sampling-Schleife
/// heraus pausiert das Polling damit bewusst, solange das Feedback
/// läuft. Auch manuell aufrufbar (Demo-/Test-Pfade).
pub async fn dispatch_hit(targets: &TargetMutex, target: usize) -> Result<(), StripError> {
    let feedback = HitFeedback::new(ColorCommand::Red, HIT_FLASH_COUNT, HIT_PHASE_DELAY_MS);

    let mut targets = targets.lock().await;
    let strip = targets.get_mut(target)?;
    for phase in feedback.phases() {
        strip.show(phase.color)?;
        if phase.delay_ms > 0 {
            Timer::after_millis(u64::from(phase.delay_ms)).await;
        }
    }
    Ok(())
}

/// Sampling Task - die Hauptschleife der Firmware
///
/// Nach der Startup-Verzögerung pollt der Task die Piezo-Kanäle mit
/// festem Abstand. Der Poll-Abstand ist der einzige Suspension-Point;
/// eine Iteration selbst läuft ohne Unterbrechung durch. Meldet die
/// State-Machine einen Treffer, läuft das Feedback synchron und das
/// Polling setzt danach wieder auf.
#[embassy_executor::task]
pub async fn sampling_task(mut adc: PiezoAdc, targets: &'static TargetMutex) {
    info!("Sampler: waiting {} ms for piezos to settle", STARTUP_DELAY_MS);
    Timer::after_millis(STARTUP_DELAY_MS).await;

    let mut controller = Sampler::new(PIEZO_CHANNELS, TRIGGER_THRESHOLD, SETTLE_WINDOW_SAMPLES);
    info!(
        "Sampler: polling {} channels, threshold {}, settle window {} samples",
        NUM_TARGETS, TRIGGER_THRESHOLD, SETTLE_WINDOW_SAMPLES
    );

    loop {
        match controller.poll(&mut adc) {
            PollOutcome::Locked(target) => {
                info!("Sampler: target {} locked, settling", target);
            }
            PollOutcome::Hit(target) => {
                info!("Sampler: hit on target {}", target);
                if let Err(e) = dispatch_hit(targets, target).await {
                    warn!("Sampler: hit feedback failed: {}", e);
                }
            }
            PollOutcome::Quiet | PollOutcome::Settling => {}
        }

        Timer::after_micros(SAMPLE_INTERVAL_US).await;
    }
}
