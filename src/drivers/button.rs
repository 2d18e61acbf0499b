// Hexabit Pedometer: Menu Button
//
// Raw GPIO level of the push-button (external pull-up, active LOW).
// Debouncing happens in `input::Debouncer`.

use esp_idf_hal::gpio::{AnyInputPin, Input, PinDriver};

use crate::tracker::ButtonInput;

pub struct Button<'d> {
    pin: PinDriver<'d, AnyInputPin, Input>,
}

impl<'d> Button<'d> {
    pub fn new(pin: PinDriver<'d, AnyInputPin, Input>) -> Self {
        Self { pin }
    }
}

impl ButtonInput for Button<'_> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low()
    }
}
