// Piezo-Sensor-Reader auf dem ESP32-C6 ADC1
//
// Implementiert `SensorReader` für die sieben Piezo-Kanäle.
// ADC1-Kanal i liegt auf GPIOi; die Zuordnung Target-Index -> Kanal
// steht in config::PIEZO_CHANNELS.

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1, GPIO2, GPIO3, GPIO4, GPIO5, GPIO6};

use target_core::SensorReader;

use crate::config::NUM_TARGETS;

/// ADC-Reader für alle Piezo-Kanäle
///
/// Hält die konfigurierten Kanal-Pins und den letzten erfolgreich
/// gewandelten Wert pro Kanal. Eine fehlgeschlagene Wandlung liefert
/// den letzten bekannten Wert (0 vor der ersten erfolgreichen Messung);
/// die Sampling-Schleife bricht dadurch niemals ab.
pub struct PiezoAdc {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    ch0: AdcPin<GPIO0<'static>, ADC1<'static>>,
    ch1: AdcPin<GPIO1<'static>, ADC1<'static>>,
    ch2: AdcPin<GPIO2<'static>, ADC1<'static>>,
    ch3: AdcPin<GPIO3<'static>, ADC1<'static>>,
    ch4: AdcPin<GPIO4<'static>, ADC1<'static>>,
    ch5: AdcPin<GPIO5<'static>, ADC1<'static>>,
    ch6: AdcPin<GPIO6<'static>, ADC1<'static>>,
    last: [u16; NUM_TARGETS],
}

impl PiezoAdc {
    /// Konfiguriert alle sieben Kanäle und den ADC
    ///
    /// Piezo-Pegel sind klein, daher 0 dB Dämpfung.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        adc1: ADC1<'static>,
        gpio0: GPIO0<'static>,
        gpio1: GPIO1<'static>,
        gpio2: GPIO2<'static>,
        gpio3: GPIO3<'static>,
        gpio4: GPIO4<'static>,
        gpio5: GPIO5<'static>,
        gpio6: GPIO6<'static>,
    ) -> Self {
        let mut config = AdcConfig::new();
        let ch0 = config.enable_pin(gpio0, Attenuation::_0dB);
        let ch1 = config.enable_pin(gpio1, Attenuation::_0dB);
        let ch2 = config.enable_pin(gpio2, Attenuation::_0dB);
        let ch3 = config.enable_pin(gpio3, Attenuation::_0dB);
        let ch4 = config.enable_pin(gpio4, Attenuation::_0dB);
        let ch5 = config.enable_pin(gpio5, Attenuation::_0dB);
        let ch6 = config.enable_pin(gpio6, Attenuation::_0dB);
        let adc = Adc::new(adc1, config);

        Self {
            adc,
            ch0,
            ch1,
            ch2,
            ch3,
            ch4,
            ch5,
            ch6,
            last: [0; NUM_TARGETS],
        }
    }
}

impl SensorReader for PiezoAdc {
    fn read_raw(&mut self, channel: u8) -> u16 {
        let result = match channel {
            0 => nb::block!(self.adc.read_oneshot(&mut self.ch0)),
            1 => nb::block!(self.adc.read_oneshot(&mut self.ch1)),
            2 => nb::block!(self.adc.read_oneshot(&mut self.ch2)),
            3 => nb::block!(self.adc.read_oneshot(&mut self.ch3)),
            4 => nb::block!(self.adc.read_oneshot(&mut self.ch4)),
            5 => nb::block!(self.adc.read_oneshot(&mut self.ch5)),
            6 => nb::block!(self.adc.read_oneshot(&mut self.ch6)),
            // Unbekannter Kanal: kann bei validierter Konfiguration
            // nicht auftreten, liefert defensiv 0
            _ => return 0,
        };

        match result {
            Ok(value) => {
                self.last[channel as usize] = value;
                value
            }
            Err(_) => self.last[channel as usize],
        }
    }
}
