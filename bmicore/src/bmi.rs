//! BMI calculation and category lookup

use egui::Color32;
use thiserror::Error;

/// Errors from parsing or validating the weight/height fields.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter valid numbers!")]
    NonNumeric,
    #[error("Height must be > 0")]
    NonPositiveHeight,
    #[error("Weight must not be negative")]
    NegativeWeight,
    #[error("Values are out of range")]
    OutOfRange,
}

/// One of the four fixed BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Upper bounds of the first three bands, ascending. Anything at or above
/// the last bound is obese.
const BAND_UPPER: [(f64, Category); 3] = [
    (18.5, Category::Underweight),
    (24.9, Category::Normal),
    (29.9, Category::Overweight),
];

impl Category {
    /// Classify a BMI value. Bands are half-open, first match wins.
    pub fn from_value(bmi: f64) -> Self {
        BAND_UPPER
            .iter()
            .find(|(upper, _)| bmi < *upper)
            .map(|(_, cat)| *cat)
            .unwrap_or(Category::Obese)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Color used for the result label and the history chart.
    pub fn color(&self) -> Color32 {
        match self {
            Category::Underweight => Color32::from_rgb(0x1E, 0x90, 0xFF),
            Category::Normal => Color32::from_rgb(0x32, 0xCD, 0x32),
            Category::Overweight => Color32::from_rgb(0xFF, 0xA5, 0x00),
            Category::Obese => Color32::from_rgb(0xFF, 0x45, 0x00),
        }
    }

    /// Flatter palette used by the vertical meter.
    pub fn meter_color(&self) -> Color32 {
        match self {
            Category::Underweight => Color32::from_rgb(0x34, 0x98, 0xDB),
            Category::Normal => Color32::from_rgb(0x2E, 0xCC, 0x71),
            Category::Overweight => Color32::from_rgb(0xF1, 0xC4, 0x0F),
            Category::Obese => Color32::from_rgb(0xE7, 0x4C, 0x3C),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Underweight => "😐",
            Category::Normal => "😄",
            Category::Overweight => "😯",
            Category::Obese => "😟",
        }
    }
}

/// A successful calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to two decimal places
    pub value: f64,
    pub category: Category,
}

impl BmiResult {
    /// Compute from already-parsed measurements.
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> Result<Self, InputError> {
        // NaN never compares <= 0, so a NaN height falls through to NonNumeric
        if height_cm <= 0.0 {
            return Err(InputError::NonPositiveHeight);
        }
        if !weight_kg.is_finite() || !height_cm.is_finite() {
            return Err(InputError::NonNumeric);
        }
        if weight_kg < 0.0 {
            return Err(InputError::NegativeWeight);
        }

        let height_m = height_cm / 100.0;
        let value = round2(weight_kg / (height_m * height_m));
        if !value.is_finite() {
            return Err(InputError::OutOfRange);
        }
        Ok(Self {
            value,
            category: Category::from_value(value),
        })
    }

    pub fn color(&self) -> Color32 {
        self.category.color()
    }

    pub fn emoji(&self) -> &'static str {
        self.category.emoji()
    }

    /// Label text, e.g. `Normal (22.86)`.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.category.label(), format_value(self.value))
    }
}

/// Parse both text fields and compute the BMI.
pub fn calculate(weight: &str, height_cm: &str) -> Result<BmiResult, InputError> {
    let weight_kg = parse_field(weight)?;
    let height_cm = parse_field(height_cm)?;
    BmiResult::from_measurements(weight_kg, height_cm)
}

fn parse_field(text: &str) -> Result<f64, InputError> {
    text.trim().parse::<f64>().map_err(|_| InputError::NonNumeric)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Shortest decimal form: `22.86`, `17.5`, `50`.
pub fn format_value(v: f64) -> String {
    let s = format!("{:.2}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
