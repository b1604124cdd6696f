//! Slider model — a bounded scalar with change subscribers.

use serde::{Deserialize, Serialize};

/// Static description of a slider: label, range, initial value, and an
/// optional discrete step the value snaps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub label: String,
    pub valmin: f64,
    pub valmax: f64,
    pub valinit: f64,
    #[serde(default)]
    pub step: Option<f64>,
}

impl SliderSpec {
    pub fn new(label: impl Into<String>, valmin: f64, valmax: f64, valinit: f64) -> Self {
        Self {
            label: label.into(),
            valmin,
            valmax,
            valinit,
            step: None,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

type ChangeHandler = Box<dyn FnMut(f64)>;

/// A slider bound to one [`SliderSpec`], owned by its figure for the
/// figure's lifetime. Holds the current value and the change subscribers.
pub struct Slider {
    spec: SliderSpec,
    value: f64,
    observers: Vec<ChangeHandler>,
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("spec", &self.spec)
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Slider {
    /// Build a slider at its initial value (clamped into range).
    pub fn new(spec: SliderSpec) -> Self {
        let value = spec.valinit.clamp(spec.valmin, spec.valmax);
        Self {
            spec,
            value,
            observers: Vec::new(),
        }
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position of the current value within the range, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        let span = self.spec.valmax - self.spec.valmin;
        if span <= 0.0 {
            0.0
        } else {
            (self.value - self.spec.valmin) / span
        }
    }

    /// Set the value, clamped into range and snapped to the configured
    /// step. Subscribers are notified in registration order with the new
    /// value — but only when the stored value actually changes.
    pub fn set_value(&mut self, value: f64) {
        let mut v = value.clamp(self.spec.valmin, self.spec.valmax);
        if let Some(step) = self.spec.step {
            if step > 0.0 {
                let steps = ((v - self.spec.valmin) / step).round();
                v = (self.spec.valmin + steps * step).clamp(self.spec.valmin, self.spec.valmax);
            }
        }
        if v == self.value {
            return;
        }
        self.value = v;
        for observer in &mut self.observers {
            observer(v);
        }
    }

    /// Move the value by one step in the given direction. Without a
    /// configured step, one step is 1/100 of the range.
    pub fn nudge(&mut self, direction: i32) {
        let step = self
            .spec
            .step
            .unwrap_or((self.spec.valmax - self.spec.valmin) / 100.0);
        self.set_value(self.value + step * direction as f64);
    }

    /// Restore the initial value.
    pub fn reset(&mut self) {
        self.set_value(self.spec.valinit);
    }

    /// Subscribe to value changes. The handler receives the new value.
    pub fn on_changed<F: FnMut(f64) + 'static>(&mut self, handler: F) {
        self.observers.push(Box::new(handler));
    }
}
