//! Interactive session: choose components, enter conditions, view results.

use ng_case::{Quantity, UnitError, parse_quantity};
use ng_eos::{Composition, EosEngine, EosError, PropertyResult, StateConditions, canonical_key};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SelectingComponents,
    EnteringConditions,
    ShowingResults,
}

/// Last failure, kept for display next to the offending input.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionError {
    pub kind: &'static str,
    pub field: String,
    pub message: String,
}

impl SessionError {
    fn from_eos(err: &EosError) -> Self {
        Self {
            kind: err.kind(),
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }

    fn from_unit(field: &str, err: &UnitError) -> Self {
        Self {
            kind: "Unit",
            field: field.to_string(),
            message: err.to_string(),
        }
    }

    fn wrong_screen(expected: Screen) -> Self {
        Self {
            kind: "Session",
            field: "screen".to_string(),
            message: format!("only allowed while {expected:?}"),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.field, self.message)
    }
}

/// Raw text entered on the conditions screen, one fraction per selected component.
#[derive(Debug, Clone, Default)]
pub struct ConditionsInput {
    pub fractions: Vec<String>,
    pub pressure: String,
    pub temperature: String,
}

pub struct Session {
    engine: EosEngine,
    screen: Screen,
    selected: Vec<String>,
    result: Option<PropertyResult>,
    last_error: Option<SessionError>,
}

impl Session {
    pub fn new(engine: EosEngine) -> Self {
        Self {
            engine,
            screen: Screen::SelectingComponents,
            selected: Vec::new(),
            result: None,
            last_error: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn result(&self) -> Option<&PropertyResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    /// Choose the components. Every name must resolve against the engine's table
    /// and appear once, aliases included.
    pub fn select<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), SessionError> {
        if self.screen != Screen::SelectingComponents {
            return Err(SessionError::wrong_screen(Screen::SelectingComponents));
        }

        let names: Vec<String> = names
            .iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        let outcome = if names.is_empty() {
            Err(SessionError::from_eos(&EosError::InvalidComposition {
                reason: "select at least one component".to_string(),
            }))
        } else {
            let mut seen = HashSet::new();
            names
                .iter()
                .try_for_each(|n| {
                    self.engine.lookup_species(n)?;
                    if seen.insert(canonical_key(n)) {
                        Ok(())
                    } else {
                        Err(EosError::InvalidComposition {
                            reason: format!("species '{n}' listed more than once"),
                        })
                    }
                })
                .map_err(|e| SessionError::from_eos(&e))
        };

        match outcome {
            Ok(()) => {
                debug!(components = ?names, "components selected");
                self.selected = names;
                self.last_error = None;
                self.screen = Screen::EnteringConditions;
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Evaluate the entered conditions. On failure the session stays on the
    /// conditions screen with the error recorded.
    pub fn submit(&mut self, input: &ConditionsInput) -> Result<&PropertyResult, SessionError> {
        if self.screen != Screen::EnteringConditions {
            return Err(SessionError::wrong_screen(Screen::EnteringConditions));
        }

        match self.evaluate(input) {
            Ok(result) => {
                self.last_error = None;
                self.screen = Screen::ShowingResults;
                let stored = self.result.insert(result);
                Ok(&*stored)
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Back to component selection, clearing everything.
    pub fn reset(&mut self) {
        self.screen = Screen::SelectingComponents;
        self.selected.clear();
        self.result = None;
        self.last_error = None;
    }

    fn evaluate(&self, input: &ConditionsInput) -> Result<PropertyResult, SessionError> {
        if input.fractions.len() != self.selected.len() {
            return Err(SessionError::from_eos(&EosError::InvalidComposition {
                reason: format!(
                    "expected {} mole fractions, got {}",
                    self.selected.len(),
                    input.fractions.len()
                ),
            }));
        }

        let mut fractions = Vec::with_capacity(self.selected.len());
        for (name, text) in self.selected.iter().zip(&input.fractions) {
            let y = parse_quantity(text, Quantity::Fraction).map_err(|e| SessionError::from_unit(name, &e))?;
            fractions.push((name.as_str(), y));
        }
        let composition = Composition::new(fractions).map_err(|e| SessionError::from_eos(&e))?;

        let p = parse_quantity(&input.pressure, Quantity::Pressure)
            .map_err(|e| SessionError::from_unit("pressure", &e))?;
        let t = parse_quantity(&input.temperature, Quantity::Temperature)
            .map_err(|e| SessionError::from_unit("temperature", &e))?;
        let conditions = StateConditions::from_si(p, t).map_err(|e| SessionError::from_eos(&e))?;

        self.engine
            .evaluate(&composition, &conditions)
            .map_err(|e| SessionError::from_eos(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(fractions: &[&str], p: &str, t: &str) -> ConditionsInput {
        ConditionsInput {
            fractions: fractions.iter().map(|s| s.to_string()).collect(),
            pressure: p.to_string(),
            temperature: t.to_string(),
        }
    }

    #[test]
    fn full_flow_and_reset() {
        let mut session = Session::new(EosEngine::builtin());
        assert_eq!(session.screen(), Screen::SelectingComponents);

        session.select(&["Methane", "Ethane"]).unwrap();
        assert_eq!(session.screen(), Screen::EnteringConditions);
        assert_eq!(session.selected(), ["Methane", "Ethane"]);

        let z = session
            .submit(&input(&["90%", "0.1"], "1 atm", "25 C"))
            .unwrap()
            .compressibility_factor;
        assert!((z - 1.0).abs() < 0.01);
        assert_eq!(session.screen(), Screen::ShowingResults);
        assert!(session.result().is_some());

        session.reset();
        assert_eq!(session.screen(), Screen::SelectingComponents);
        assert!(session.selected().is_empty());
        assert!(session.result().is_none());
    }

    #[test]
    fn failed_submit_stays_on_conditions() {
        let mut session = Session::new(EosEngine::builtin());
        session.select(&["Methane"]).unwrap();

        let err = session.submit(&input(&["1.0"], "0 bar", "300")).unwrap_err();
        assert_eq!(err.field, "pressure");
        assert_eq!(session.screen(), Screen::EnteringConditions);
        assert_eq!(session.last_error(), Some(&err));

        let err = session.submit(&input(&["0.999"], "1 bar", "300")).unwrap_err();
        assert_eq!(err.kind, "InvalidComposition");
        assert_eq!(err.field, "composition");
        assert_eq!(session.screen(), Screen::EnteringConditions);

        session.submit(&input(&["1"], "1 bar", "300")).unwrap();
        assert!(session.last_error().is_none());
    }

    #[test]
    fn unknown_component_is_refused_at_selection() {
        let mut session = Session::new(EosEngine::builtin());
        let err = session.select(&["Methane", "Unobtainium"]).unwrap_err();
        assert_eq!(err.kind, "UnknownSpecies");
        assert_eq!(err.field, "Unobtainium");
        assert_eq!(session.screen(), Screen::SelectingComponents);
    }

    #[test]
    fn transitions_are_screen_checked() {
        let mut session = Session::new(EosEngine::builtin());
        assert!(session.submit(&input(&["1"], "1 bar", "300")).is_err());
        session.select(&["N2"]).unwrap();
        assert!(session.select(&["O2"]).is_err());
        assert_eq!(session.selected(), ["N2"]);
    }

    #[test]
    fn alias_duplicates_are_refused_at_selection() {
        let mut session = Session::new(EosEngine::builtin());
        let err = session.select(&["Methane", "CH4"]).unwrap_err();
        assert_eq!(err.kind, "InvalidComposition");
        assert!(err.message.contains("CH4"));
        assert_eq!(session.screen(), Screen::SelectingComponents);
        assert!(session.selected().is_empty());

        session.select(&["Methane", "Ethane"]).unwrap();
        session.submit(&input(&["0.5", "0.5"], "1 bar", "300")).unwrap();
        assert_eq!(session.screen(), Screen::ShowingResults);
    }

    #[test]
    fn reset_leaves_conditions_screen() {
        let mut session = Session::new(EosEngine::builtin());
        session.select(&["Methane"]).unwrap();
        session.submit(&input(&["0.5"], "1 bar", "300")).unwrap_err();
        assert_eq!(session.screen(), Screen::EnteringConditions);

        session.reset();
        assert_eq!(session.screen(), Screen::SelectingComponents);
        assert!(session.last_error().is_none());
        session.select(&["Ethane"]).unwrap();
        assert_eq!(session.selected(), ["Ethane"]);
    }
}
