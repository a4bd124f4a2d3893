//! Stateful form model.
//!
//! [`Model`] owns the current input record and the last computed estimate,
//! and is the only place state changes happen. Views issue commands
//! (`set_field`, `set_sex`, `toggle_flag`, `compute`, `reset`) and read back
//! through [`Model::snapshot`]; they never cache inputs of their own.
//!
//! The one invariant worth naming: every input mutation clears the stored
//! estimate. A result on screen always corresponds to the inputs on screen,
//! and only an explicit `compute` re-populates it. The invariant is enforced
//! in each mutator rather than by any subscription mechanism.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Result;
use crate::inputs::{Inputs, NumericField, RiskFactor, Sex};
use crate::score::{self, RiskEstimate};

/// Handle returned by [`Model::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&Snapshot)>;

/// A read-only view of the full model state.
///
/// Carries the raw inputs, the derived BMI and risk-factor count, and the
/// current estimate (`None` until `compute` runs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub age: i64,
    pub sex: Sex,
    pub weight: f64,
    pub height: f64,
    pub t_score: Option<f64>,
    pub flags: crate::inputs::RiskFlags,
    pub bmi: f64,
    pub risk_count: usize,
    pub result: Option<RiskEstimate>,
}

/// The calculator model.
///
/// All commands are synchronous and complete before returning. Listeners
/// fire synchronously in registration order after every state change;
/// they are observers only and must not issue commands back into the model.
#[derive(Default)]
pub struct Model {
    inputs: Inputs,
    result: Option<RiskEstimate>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Model {
    /// Create a model with the questionnaire defaults and no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current inputs, for direct read access.
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Last computed estimate, if any.
    pub fn result(&self) -> Option<RiskEstimate> {
        self.result
    }

    /// Set a numeric field from raw text, coercing on entry.
    ///
    /// Non-numeric text coerces to 0 rather than surfacing an error. An
    /// empty (or whitespace) T-score is the distinct "no BMD" state, not 0.
    /// Clears the stored estimate.
    pub fn set_field(&mut self, field: NumericField, raw: &str) {
        let raw = raw.trim();
        match field {
            NumericField::Age => self.inputs.age = coerce_int(raw),
            NumericField::Weight => self.inputs.weight = coerce_float(raw),
            NumericField::Height => self.inputs.height = coerce_float(raw),
            NumericField::TScore => {
                self.inputs.t_score = if raw.is_empty() {
                    None
                } else {
                    Some(coerce_float(raw))
                };
            }
        }
        self.invalidate();
        self.notify();
    }

    /// Set the patient sex. Clears the stored estimate.
    pub fn set_sex(&mut self, sex: Sex) {
        self.inputs.sex = sex;
        self.invalidate();
        self.notify();
    }

    /// Flip one risk-factor flag. Clears the stored estimate.
    pub fn toggle_flag(&mut self, factor: RiskFactor) {
        self.inputs.flags.toggle(factor);
        self.invalidate();
        self.notify();
    }

    /// Flip a risk-factor flag addressed by its wire key.
    ///
    /// Unknown keys are a programmer error and are rejected without touching
    /// any state.
    pub fn toggle_flag_named(&mut self, key: &str) -> Result<()> {
        let factor = RiskFactor::from_str(key)?;
        self.toggle_flag(factor);
        Ok(())
    }

    /// Score the current inputs and store the estimate.
    ///
    /// Idempotent for fixed inputs: calling twice without an intervening
    /// mutation stores the same pair.
    pub fn compute(&mut self) {
        let estimate = score::estimate(&self.inputs);
        tracing::debug!(
            age = self.inputs.age,
            sex = %self.inputs.sex,
            bmi = self.inputs.bmi(),
            risk_count = self.inputs.risk_count(),
            major = estimate.major,
            hip = estimate.hip,
            "computed risk estimate"
        );
        self.result = Some(estimate);
        self.notify();
    }

    /// Restore the questionnaire defaults and clear the estimate.
    pub fn reset(&mut self) {
        self.inputs = Inputs::default();
        self.result = None;
        self.notify();
    }

    /// Snapshot the full state, including derived values.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            age: self.inputs.age,
            sex: self.inputs.sex,
            weight: self.inputs.weight,
            height: self.inputs.height,
            t_score: self.inputs.t_score,
            flags: self.inputs.flags,
            bmi: self.inputs.bmi(),
            risk_count: self.inputs.risk_count(),
            result: self.result,
        }
    }

    /// Register a listener fired after every state change.
    ///
    /// Listeners run synchronously, in registration order, with a snapshot
    /// of the state after the change.
    pub fn subscribe(&mut self, listener: impl Fn(&Snapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn invalidate(&mut self) {
        self.result = None;
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &self.listeners {
            listener(&snapshot);
        }
    }
}

/// Integer coercion: integer text, then float text truncated, then 0.
fn coerce_int(raw: &str) -> i64 {
    raw.parse::<i64>()
        .or_else(|_| raw.parse::<f64>().map(|v| v as i64))
        .unwrap_or(0)
}

/// Float coercion: numeric text, else 0.
fn coerce_float(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0)
}
