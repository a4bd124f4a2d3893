//! Fracture risk data model.
//!
//! This crate holds everything below the presentation layer of Fracture Risk
//! Studio: the questionnaire input record, the risk-factor flag set, the
//! placeholder scoring heuristic, and the stateful [`Model`] that the GUI
//! drives through commands.
//!
//! The scoring formula is a simplified simulation, NOT the licensed FRAX
//! algorithm. If real FRAX coefficients ever become available, [`score`] is
//! the single replacement point; nothing else in the workspace encodes the
//! formula.

pub mod error;
pub mod inputs;
pub mod model;
pub mod score;

pub use error::{ModelError, Result};
pub use inputs::{Inputs, NumericField, RiskFactor, RiskFlags, Sex};
pub use model::{ListenerId, Model, Snapshot};
pub use score::{RiskEstimate, estimate, round1};
