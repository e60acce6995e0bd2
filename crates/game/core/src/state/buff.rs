//! Attribute buffs carried by item definitions and instances.

use core::fmt;

use crate::env::BuffRng;

/// Character attribute a buff modifies.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    #[default]
    Agility,
    Intellect,
    Stamina,
    Strength,
}

/// Numeric modifier bound to one attribute.
///
/// Invariant: `min <= value <= max` (for a degenerate range `min > max`,
/// `value == min`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeBuff {
    pub attribute: Attribute,
    pub min: i32,
    pub max: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    value: i32,
}

impl AttributeBuff {
    /// Creates a buff with an explicit value, clamped into `[min, max]`.
    pub fn fixed(attribute: Attribute, min: i32, max: i32, value: i32) -> Self {
        let mut buff = Self {
            attribute,
            min,
            max,
            value: min,
        };
        buff.set_value(value);
        buff
    }

    /// Creates a buff whose value is drawn uniformly from `[min, max)`.
    pub fn rolled(attribute: Attribute, min: i32, max: i32, rng: &mut impl BuffRng) -> Self {
        let mut buff = Self::fixed(attribute, min, max, min);
        buff.reroll(rng);
        buff
    }

    /// Copies this buff, re-rolling the value only when `rng` is provided.
    pub fn instance(&self, rng: Option<&mut dyn BuffRng>) -> Self {
        let mut copy = *self;
        if let Some(rng) = rng {
            copy.reroll(rng);
        }
        copy
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Sets the value, clamping it into `[min, max]`.
    pub fn set_value(&mut self, value: i32) {
        self.value = if self.min > self.max {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
    }

    /// Draws a fresh value from `[min, max)`.
    pub fn reroll(&mut self, rng: &mut (impl BuffRng + ?Sized)) {
        self.value = rng.range(self.min, self.max);
    }

    /// Human-readable form; `verbose` appends the `<min,max>` bounds.
    pub fn signature(&self, verbose: bool) -> String {
        if verbose {
            format!("{}: {} <{},{}>", self.attribute, self.value, self.min, self.max)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for AttributeBuff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.attribute, self.value)
    }
}
