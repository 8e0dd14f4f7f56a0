// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use target_core::ColorCommand;
use target_firmware::TargetMutex;
use target_firmware::hal::{GpioStripLine, PiezoAdc};
use target_firmware::tasks::{init_targets, sampling_task};
use target_firmware::leds;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und Target-Map, startet die Embassy Runtime
/// und spawnt den Sampling-Task. Danach schläft main() - alle Arbeit
/// läuft in Tasks. Konfigurations-Fehler beim Start sind fatal; das
/// Gerät kann ohne gültige Sensor-/Strip-Konfiguration nicht arbeiten.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    // Das Bit-Timing des Strip-Treibers ist darauf kalibriert
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Strip-Datenleitungen (Push-Pull Output, Idle-Pegel Low)
    // Reihenfolge = Target-Reihenfolge, siehe config::STRIP_GPIO_PINS
    let out_config = OutputConfig::default();
    let lines = [
        GpioStripLine::new(Output::new(peripherals.GPIO8, Level::Low, out_config)),
        GpioStripLine::new(Output::new(peripherals.GPIO9, Level::Low, out_config)),
        GpioStripLine::new(Output::new(peripherals.GPIO10, Level::Low, out_config)),
        GpioStripLine::new(Output::new(peripherals.GPIO11, Level::Low, out_config)),
        GpioStripLine::new(Output::new(peripherals.GPIO12, Level::Low, out_config)),
        GpioStripLine::new(Output::new(peripherals.GPIO13, Level::Low, out_config)),
        GpioStripLine::new(Output::new(peripherals.GPIO15, Level::Low, out_config)),
    ];

    // Target-Map bauen und validieren - Fehler hier sind fatal
    let mut targets = init_targets(lines).expect("Target map validation failed");

    // Bereit-Anzeige auf allen Targets
    if let Err(e) = leds::set_all(&mut targets, ColorCommand::GreenActive) {
        warn!("Boot: ready pattern failed: {}", e);
    }

    // Target-Map muss 'static sein für Tasks
    static TARGETS: static_cell::StaticCell<TargetMutex> = static_cell::StaticCell::new();
    let targets = &*TARGETS.init(TargetMutex::new(targets));

    // Piezo-ADC konfigurieren (ADC1-Kanäle 0..6 auf GPIO0..GPIO6)
    let adc = PiezoAdc::new(
        peripherals.ADC1,
        peripherals.GPIO0,
        peripherals.GPIO1,
        peripherals.GPIO2,
        peripherals.GPIO3,
        peripherals.GPIO4,
        peripherals.GPIO5,
        peripherals.GPIO6,
    );

    info!("Boot complete, starting sampler");
    spawner.spawn(sampling_task(adc, targets)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
