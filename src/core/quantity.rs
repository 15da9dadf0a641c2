/// Step-by-one quantity selector used before adding or adjusting a line.
/// The value never leaves `1..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityPicker {
    value: u32,
    max: u32,
}

impl QuantityPicker {
    pub fn new(max: u32) -> Self {
        Self::starting_at(1, max)
    }

    /// Starts from an existing quantity, clamped into range.
    pub fn starting_at(value: u32, max: u32) -> Self {
        let max = max.max(1);
        Self {
            value: value.clamp(1, max),
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Steps up by one. At the ceiling the value stays put and a warning is returned.
    pub fn increase(&mut self) -> Option<String> {
        if self.value < self.max {
            self.value += 1;
            None
        } else {
            Some(format!("Max limit is {} per item.", self.max))
        }
    }

    /// Steps down by one, stopping at 1.
    pub fn decrease(&mut self) {
        if self.value > 1 {
            self.value -= 1;
        }
    }
}
