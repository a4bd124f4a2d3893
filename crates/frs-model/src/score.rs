//! Placeholder fracture-risk scoring.
//!
//! Estimates 10-year probabilities of major osteoporotic fracture and hip
//! fracture from the questionnaire inputs. The formula is a simplified
//! simulation for demo purposes - it is NOT the licensed FRAX algorithm and
//! must not be "corrected" towards it. Swap this module out wholesale if the
//! real coefficient tables ever become available.

use serde::{Deserialize, Serialize};

use crate::inputs::{Inputs, Sex};

/// Growth per year of age above the baseline of 40.
const AGE_WEIGHT: f64 = 0.18;
/// Baseline contribution by sex.
const SEX_FEMALE: f64 = 4.2;
const SEX_MALE: f64 = 2.6;
/// Flat penalty for a BMI below 20 (lower BMI, higher risk).
const LOW_BMI_PENALTY: f64 = 3.0;
/// Scale on the T-score deficit below -1.0 (lower T-score, higher risk).
const T_SCORE_WEIGHT: f64 = 1.6;
/// Contribution per selected risk factor.
const RISK_FACTOR_WEIGHT: f64 = 2.2;

/// Ceiling on the reported major osteoporotic probability, in percent.
const MAJOR_CEILING: f64 = 60.0;
/// Ceiling on the reported hip fracture probability, in percent.
const HIP_CEILING: f64 = 30.0;

/// A computed pair of 10-year probabilities, in percent, one decimal each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// Major osteoporotic fracture probability, 0.0 to 60.0.
    pub major: f64,
    /// Hip fracture probability, 0.0 to 30.0.
    pub hip: f64,
}

/// Rounds half-away-from-zero to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Compute the risk estimate for an input record.
///
/// Pure and total: out-of-range inputs are scored on their raw values, and
/// the BMI guard in [`Inputs::bmi`] keeps the arithmetic finite. The BMI
/// threshold compares the rounded BMI, matching what the form displays.
pub fn estimate(inputs: &Inputs) -> RiskEstimate {
    let age_factor = (inputs.age - 40).max(0) as f64 * AGE_WEIGHT;
    let sex_factor = match inputs.sex {
        Sex::Female => SEX_FEMALE,
        Sex::Male => SEX_MALE,
    };
    let bmi_factor = if inputs.bmi() < 20.0 {
        LOW_BMI_PENALTY
    } else {
        0.0
    };
    let t_score_factor = match inputs.t_score {
        Some(t) if t < -1.0 => (t + 1.0).abs() * T_SCORE_WEIGHT,
        _ => 0.0,
    };
    let rf_term = inputs.risk_count() as f64 * RISK_FACTOR_WEIGHT;

    let raw = age_factor + sex_factor + bmi_factor + t_score_factor + rf_term;

    RiskEstimate {
        major: round1(raw / 7.0).min(MAJOR_CEILING),
        hip: round1(raw / 14.0).min(HIP_CEILING),
    }
}

#[cfg(test)]
mod tests {
    use super::round1;

    #[test]
    fn round1_half_away_from_zero() {
        // 0.25 is exactly representable, so the tie is a true half.
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(2.0691), 2.1);
        assert_eq!(round1(1.0346), 1.0);
        assert_eq!(round1(0.6286), 0.6);
    }
}
