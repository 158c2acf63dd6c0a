//! BMI classification
//!
//! Computes the body mass index from free-text weight and height inputs and
//! maps the ratio onto one of six fixed categories with a training
//! suggestion.

use crate::util::units::format_ratio;
use crate::{AppError, Result};
use std::fmt;

/// BMI category, lower bound of each band inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 up to 35
    ObesityGrade1,
    /// 35 up to 40
    ObesityGrade2,
    /// 40 and above
    ObesityGrade3,
}

impl BmiCategory {
    /// All categories in ascending order
    pub const ALL: [BmiCategory; 6] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::ObesityGrade1,
        Self::ObesityGrade2,
        Self::ObesityGrade3,
    ];

    /// Classify a BMI ratio.
    ///
    /// Anything that fails every lower band, NaN included, is grade 3.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 18.5 {
            Self::Underweight
        } else if ratio < 25.0 {
            Self::Normal
        } else if ratio < 30.0 {
            Self::Overweight
        } else if ratio < 35.0 {
            Self::ObesityGrade1
        } else if ratio < 40.0 {
            Self::ObesityGrade2
        } else {
            Self::ObesityGrade3
        }
    }

    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Abaixo do peso",
            Self::Normal => "Peso normal",
            Self::Overweight => "Sobrepeso",
            Self::ObesityGrade1 => "Obesidade Grau 1",
            Self::ObesityGrade2 => "Obesidade Grau 2 (severa)",
            Self::ObesityGrade3 => "Obesidade Grau 3 (mórbida)",
        }
    }

    /// Training advice for this category
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Underweight => {
                "Treino para ganho de massa muscular leve e alimentação balanceada."
            }
            Self::Normal => "Manutenção de peso com exercícios regulares e alimentação saudável.",
            Self::Overweight => "Treino para perda de gordura e controle da ingestão calórica.",
            Self::ObesityGrade1 => "Treino para perda de gordura e fortalecimento cardiovascular.",
            Self::ObesityGrade2 => {
                "Treino supervisionado para perda de gordura e melhoria cardiovascular."
            }
            Self::ObesityGrade3 => "Consulte um profissional de saúde para orientação personalizada.",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shorthand for [`BmiCategory::from_ratio`]
pub fn classify(ratio: f64) -> BmiCategory {
    BmiCategory::from_ratio(ratio)
}

/// Compute the BMI ratio from kilograms and centimeters
///
/// No range checks: zero or negative inputs yield a meaningless but finite
/// or infinite ratio rather than an error.
pub fn compute_ratio(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Outcome of one BMI calculation
#[derive(Debug, Clone, PartialEq)]
pub struct BmiReport {
    pub ratio: f64,
    pub category: BmiCategory,
}

impl BmiReport {
    /// Build a report from already-parsed measurements
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> Self {
        let ratio = compute_ratio(weight_kg, height_cm);
        Self {
            ratio,
            category: classify(ratio),
        }
    }

    /// Ratio rounded to two decimals
    pub fn formatted_ratio(&self) -> String {
        format_ratio(self.ratio)
    }

    /// One-line result shown on the page
    pub fn summary(&self) -> String {
        format!(
            "Seu IMC é: {} ({})",
            self.formatted_ratio(),
            self.category.label()
        )
    }

    pub fn suggestion(&self) -> &'static str {
        self.category.suggestion()
    }

    /// Body of the result dialog
    pub fn dialog_message(&self) -> String {
        format!("{}\n\n{}", self.summary(), self.suggestion())
    }
}

/// Parse one numeric field, naming it in the error
pub fn parse_measurement(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidMeasurement {
            field,
            value: raw.to_string(),
        })
}

/// Parse both inputs and compute the report
pub fn calculate(weight: &str, height: &str) -> Result<BmiReport> {
    let weight_kg = parse_measurement("weight", weight)?;
    let height_cm = parse_measurement("height", height)?;
    Ok(BmiReport::from_measurements(weight_kg, height_cm))
}
