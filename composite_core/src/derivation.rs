//! # Derivation Trails
//!
//! Every calculation stage returns, next to its numbers, an ordered list of
//! `key → substituted formula` lines such as
//! `"Mu" → "w_u·L²/8 = 2.284 × 30.00² / 8 = 256.95 k-ft"`. Report renderers
//! print them verbatim; nothing is kept in global report state.
//!
//! ```rust
//! use composite_core::derivation::DerivationTrail;
//! use composite_core::equations::Equation;
//!
//! let mut trail = DerivationTrail::new();
//! trail.push_eq("Mu", Equation::UniformLoadMaxMoment, "2.284 × 30.00² / 8 = 256.95 k-ft");
//! trail.push("b_eff", "min(90.00, 120.00) = 90.00 in");
//!
//! assert_eq!(trail.get("b_eff"), Some("min(90.00, 120.00) = 90.00 in"));
//! assert_eq!(trail.keys().collect::<Vec<_>>(), ["Mu", "b_eff"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::Equation;

/// One line of a derivation trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationStep {
    /// Quantity being derived (e.g. "phi_Mn")
    pub key: String,
    /// Formula with values substituted and the result with units
    pub text: String,
    /// Registry entry of the formula, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<Equation>,
}

impl DerivationStep {
    /// `key: text [reference]`
    pub fn display_line(&self) -> String {
        match self.equation {
            Some(eq) => format!(
                "{}: {} [{}]",
                self.key,
                self.text,
                eq.metadata().reference.short_form()
            ),
            None => format!("{}: {}", self.key, self.text),
        }
    }
}

/// Ordered key → text map. Re-pushing a key replaces its text in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivationTrail {
    steps: Vec<DerivationStep>,
}

impl DerivationTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step with no registry entry
    pub fn push(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.insert(key.into(), text.into(), None);
    }

    /// Record a step that evaluates a registered equation
    pub fn push_eq(&mut self, key: impl Into<String>, equation: Equation, text: impl Into<String>) {
        self.insert(key.into(), text.into(), Some(equation));
    }

    fn insert(&mut self, key: String, text: String, equation: Option<Equation>) {
        if let Some(step) = self.steps.iter_mut().find(|s| s.key == key) {
            step.text = text;
            step.equation = equation;
        } else {
            self.steps.push(DerivationStep { key, text, equation });
        }
    }

    /// Text recorded for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.steps
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.text.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DerivationStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
