// Strip-Operationen oberhalb der Target-Map
//
// Komfort-Funktionen für das Spiel-Glue: ganze Targets oder alle
// Strips auf Kommando-Farben setzen. Alles baut auf fill/flush auf.

use defmt::info;
use embassy_time::Timer;

use target_core::{ColorCommand, StripError};

use crate::Targets;
use crate::config::{NUM_TARGETS, WINNER_FLASH_COUNT, WINNER_FLASH_DELAY_MS};

/// Setzt ein einzelnes Target auf eine Kommando-Farbe
pub fn send_color(targets: &mut Targets, target: usize, cmd: ColorCommand) -> Result<(), StripError> {
    targets.get_mut(target)?.show(cmd)
}

/// Setzt alle Targets auf dieselbe Kommando-Farbe
pub fn set_all(targets: &mut Targets, cmd: ColorCommand) -> Result<(), StripError> {
    for target in targets.iter_mut() {
        target.show(cmd)?;
    }
    Ok(())
}

/// Alle Strips aus
pub fn all_off(targets: &mut Targets) -> Result<(), StripError> {
    set_all(targets, ColorCommand::Off)
}

/// Ein Kommando pro Target, in Target-Reihenfolge
pub fn set_status_pattern(
    targets: &mut Targets,
    pattern: &[ColorCommand; NUM_TARGETS],
) -> Result<(), StripError> {
    for (target, cmd) in targets.iter_mut().zip(pattern) {
        target.show(*cmd)?;
    }
    Ok(())
}

/// Sieger-Muster: alle Strips blitzen und bleiben danach an
pub async fn flash_winner(targets: &mut Targets, cmd: ColorCommand) -> Result<(), StripError> {
    info!("LEDs: winner flash with {}", cmd);
    for _ in 0..WINNER_FLASH_COUNT {
        set_all(targets, cmd)?;
        Timer::after_millis(WINNER_FLASH_DELAY_MS).await;
        all_off(targets)?;
        Timer::after_millis(WINNER_FLASH_DELAY_MS).await;
    }
    set_all(targets, cmd)
}
