//! Type-safe questionnaire inputs.
//!
//! These types pin down the input record of the risk calculator: patient
//! demographics, anthropometrics, the optional bone-density T-score, and the
//! seven binary clinical risk factors. The flag set is a struct rather than a
//! map so the key set is fixed at compile time - there is no state in which a
//! flag is missing or an extra key appears.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::score::round1;

// =============================================================================
// SEX
// =============================================================================

/// Patient sex as used by the scoring baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Female,
    Male,
}

impl Sex {
    /// Returns the wire key used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }

    /// Both options, for radio-group style pickers.
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// RISK FACTORS
// =============================================================================

/// The seven binary clinical risk factors of the questionnaire.
///
/// The wire keys (`key()`) are the serialized field names of the flag record;
/// the labels (`label()`) are the authoritative English checkbox texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactor {
    PreviousFracture,
    ParentHip,
    Smoking,
    Glucocorticoids,
    Ra,
    SecondaryOsteo,
    Alcohol3,
}

impl RiskFactor {
    /// All seven factors in questionnaire order.
    pub const ALL: [RiskFactor; 7] = [
        RiskFactor::PreviousFracture,
        RiskFactor::ParentHip,
        RiskFactor::Smoking,
        RiskFactor::Glucocorticoids,
        RiskFactor::Ra,
        RiskFactor::SecondaryOsteo,
        RiskFactor::Alcohol3,
    ];

    /// Returns the serialized field key for this factor.
    pub fn key(&self) -> &'static str {
        match self {
            RiskFactor::PreviousFracture => "previousFracture",
            RiskFactor::ParentHip => "parentHip",
            RiskFactor::Smoking => "smoking",
            RiskFactor::Glucocorticoids => "glucocorticoids",
            RiskFactor::Ra => "ra",
            RiskFactor::SecondaryOsteo => "secondaryOsteo",
            RiskFactor::Alcohol3 => "alcohol3",
        }
    }

    /// Human-readable checkbox label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::PreviousFracture => "Previous fracture",
            RiskFactor::ParentHip => "Parent fractured hip",
            RiskFactor::Smoking => "Current smoking",
            RiskFactor::Glucocorticoids => "Glucocorticoids",
            RiskFactor::Ra => "Rheumatoid arthritis",
            RiskFactor::SecondaryOsteo => "Secondary osteoporosis",
            RiskFactor::Alcohol3 => "Alcohol \u{2265}3 units/day",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for RiskFactor {
    type Err = ModelError;

    /// Parse a wire key into a `RiskFactor`. Unknown keys are rejected:
    /// the flag set is closed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "previousFracture" => Ok(RiskFactor::PreviousFracture),
            "parentHip" => Ok(RiskFactor::ParentHip),
            "smoking" => Ok(RiskFactor::Smoking),
            "glucocorticoids" => Ok(RiskFactor::Glucocorticoids),
            "ra" => Ok(RiskFactor::Ra),
            "secondaryOsteo" => Ok(RiskFactor::SecondaryOsteo),
            "alcohol3" => Ok(RiskFactor::Alcohol3),
            other => Err(ModelError::UnknownFlag(other.to_owned())),
        }
    }
}

/// The flag record: one boolean per risk factor, exactly seven keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFlags {
    pub previous_fracture: bool,
    pub parent_hip: bool,
    pub smoking: bool,
    pub glucocorticoids: bool,
    pub ra: bool,
    pub secondary_osteo: bool,
    pub alcohol3: bool,
}

impl RiskFlags {
    pub fn get(&self, factor: RiskFactor) -> bool {
        match factor {
            RiskFactor::PreviousFracture => self.previous_fracture,
            RiskFactor::ParentHip => self.parent_hip,
            RiskFactor::Smoking => self.smoking,
            RiskFactor::Glucocorticoids => self.glucocorticoids,
            RiskFactor::Ra => self.ra,
            RiskFactor::SecondaryOsteo => self.secondary_osteo,
            RiskFactor::Alcohol3 => self.alcohol3,
        }
    }

    pub fn set(&mut self, factor: RiskFactor, value: bool) {
        match factor {
            RiskFactor::PreviousFracture => self.previous_fracture = value,
            RiskFactor::ParentHip => self.parent_hip = value,
            RiskFactor::Smoking => self.smoking = value,
            RiskFactor::Glucocorticoids => self.glucocorticoids = value,
            RiskFactor::Ra => self.ra = value,
            RiskFactor::SecondaryOsteo => self.secondary_osteo = value,
            RiskFactor::Alcohol3 => self.alcohol3 = value,
        }
    }

    pub fn toggle(&mut self, factor: RiskFactor) {
        self.set(factor, !self.get(factor));
    }

    /// Number of factors currently selected.
    pub fn count_selected(&self) -> usize {
        RiskFactor::ALL.iter().filter(|f| self.get(**f)).count()
    }
}

// =============================================================================
// INPUT RECORD
// =============================================================================

/// The numeric fields a view can write through `Model::set_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    Weight,
    Height,
    TScore,
}

/// The questionnaire input record.
///
/// The declared ranges (age 40-90, weight 20-200 kg, height 100-230 cm) are
/// advisory: out-of-range values are stored as entered and scored on their
/// raw values. The only guard is the positive-height clamp inside the BMI
/// divisor.
///
/// `t_score` is two-valued: `Some(t)` is a measured bone density, `None`
/// means no BMD is available and the T-score term of the score is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub age: i64,
    pub sex: Sex,
    pub weight: f64,
    pub height: f64,
    pub t_score: Option<f64>,
    pub flags: RiskFlags,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            age: 65,
            sex: Sex::Female,
            weight: 51.0,
            height: 164.0,
            t_score: Some(-2.74),
            flags: RiskFlags::default(),
        }
    }
}

impl Inputs {
    /// Body mass index, weight(kg) / height(m)^2, rounded to one decimal.
    ///
    /// A non-positive height is clamped to 1 m for the division only; the
    /// stored height is untouched. This keeps the result finite for any
    /// input the form can produce.
    pub fn bmi(&self) -> f64 {
        let metres = if self.height > 0.0 {
            self.height / 100.0
        } else {
            1.0
        };
        round1(self.weight / (metres * metres))
    }

    /// Number of risk factors currently selected.
    pub fn risk_count(&self) -> usize {
        self.flags.count_selected()
    }
}
