//! BMI calculation and classification
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: `compute_bmi` and `classify_bmi` have no side effects
//! 2. **SI Units Only**: weight in kilograms, height in meters
//! 3. **Closed Classification**: eight fixed bands, never extended at runtime

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Categories
// ============================================================================

/// BMI category classification, ordered by ascending threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    MagrezaGrave,
    MagrezaModerada,
    MagrezaLeve,
    Saudavel,
    Sobrepeso,
    ObesidadeGrauI,
    ObesidadeGrauII,
    ObesidadeGrauIII,
}

impl BmiCategory {
    /// Every category, lowest band first
    pub const ALL: [BmiCategory; 8] = [
        BmiCategory::MagrezaGrave,
        BmiCategory::MagrezaModerada,
        BmiCategory::MagrezaLeve,
        BmiCategory::Saudavel,
        BmiCategory::Sobrepeso,
        BmiCategory::ObesidadeGrauI,
        BmiCategory::ObesidadeGrauII,
        BmiCategory::ObesidadeGrauIII,
    ];

    /// Get the BMI band for this category as `[lower, upper)`
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::MagrezaGrave => (f64::NEG_INFINITY, 16.0),
            BmiCategory::MagrezaModerada => (16.0, 17.0),
            BmiCategory::MagrezaLeve => (17.0, 18.5),
            BmiCategory::Saudavel => (18.5, 25.0),
            BmiCategory::Sobrepeso => (25.0, 30.0),
            BmiCategory::ObesidadeGrauI => (30.0, 35.0),
            BmiCategory::ObesidadeGrauII => (35.0, 40.0),
            BmiCategory::ObesidadeGrauIII => (40.0, f64::INFINITY),
        }
    }

    /// Get the display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::MagrezaGrave => "Magreza grave",
            BmiCategory::MagrezaModerada => "Magreza moderada",
            BmiCategory::MagrezaLeve => "Magreza leve",
            BmiCategory::Saudavel => "Saudável",
            BmiCategory::Sobrepeso => "Sobrepeso",
            BmiCategory::ObesidadeGrauI => "Obesidade Grau I",
            BmiCategory::ObesidadeGrauII => "Obesidade Grau II",
            BmiCategory::ObesidadeGrauIII => "Obesidade Grau III",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// No range checks happen here; callers validate first.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
///
/// Each band includes its lower bound, so 18.5 is `Saudavel` and 25.0 is
/// `Sobrepeso`.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 16.0 {
        BmiCategory::MagrezaGrave
    } else if bmi < 17.0 {
        BmiCategory::MagrezaModerada
    } else if bmi < 18.5 {
        BmiCategory::MagrezaLeve
    } else if bmi < 25.0 {
        BmiCategory::Saudavel
    } else if bmi < 30.0 {
        BmiCategory::Sobrepeso
    } else if bmi < 35.0 {
        BmiCategory::ObesidadeGrauI
    } else if bmi < 40.0 {
        BmiCategory::ObesidadeGrauII
    } else {
        BmiCategory::ObesidadeGrauIII
    }
}

// ============================================================================
// Report
// ============================================================================

/// BMI value paired with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    /// BMI value, unrounded
    pub bmi: f64,
    /// BMI category
    pub category: BmiCategory,
}

impl BmiReport {
    /// Compute and classify a measurement
    pub fn from_measurement(weight_kg: f64, height_m: f64) -> Self {
        let bmi = compute_bmi(weight_kg, height_m);
        Self {
            bmi,
            category: classify_bmi(bmi),
        }
    }

    /// BMI with two decimals and a comma separator, e.g. `22,86`
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.bmi).replace('.', ",")
    }

    /// Render as a single JSON object including the category label
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "bmi": self.bmi,
            "category": self.category,
            "label": self.category.label(),
        })
    }
}

impl fmt::Display for BmiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IMC: {} - {}", self.formatted_value(), self.category)
    }
}
