//! Phase and step schedule.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// One step of a phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    /// Automatic steps are advanced through without waiting for input.
    #[serde(default)]
    pub automatic: bool,
}

impl Step {
    /// A step that waits for the active position.
    #[must_use]
    pub fn manual(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automatic: false,
        }
    }

    /// A step the engine passes through on its own.
    #[must_use]
    pub fn automatic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automatic: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub steps: Vec<Step>,
}

impl Phase {
    #[must_use]
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }
}

/// The ordered phases of a turn.
///
/// A schedule is never empty, no phase is empty, and at least one step is
/// manual, so advancing always comes to rest somewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Phase>", into = "Vec<Phase>")]
pub struct Schedule {
    phases: Vec<Phase>,
}

impl Schedule {
    /// Build a schedule, rejecting shapes the engine cannot run.
    pub fn new(phases: Vec<Phase>) -> Result<Self> {
        if phases.is_empty() {
            return Err(GameError::Setup(
                "A schedule needs at least one phase.".to_string(),
            ));
        }
        if let Some(phase) = phases.iter().find(|p| p.steps.is_empty()) {
            return Err(GameError::Setup(format!(
                "The phase {} has no steps.",
                phase.name
            )));
        }
        if phases.iter().flat_map(|p| &p.steps).all(|s| s.automatic) {
            return Err(GameError::Setup(
                "A schedule needs at least one step that is not automatic.".to_string(),
            ));
        }
        Ok(Self { phases })
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    #[must_use]
    pub fn step(&self, phase: usize, step: usize) -> Option<&Step> {
        self.phases.get(phase)?.steps.get(step)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// The step after `step` within `phase`, or `None` at the end of the phase.
    #[must_use]
    pub fn next_step(&self, phase: usize, step: usize) -> Option<usize> {
        let steps = self.phases.get(phase)?.steps.len();
        (step + 1 < steps).then_some(step + 1)
    }

    /// The phase after `phase`, and whether the schedule wrapped to the start.
    #[must_use]
    pub fn next_phase(&self, phase: usize) -> (usize, bool) {
        if phase + 1 < self.phases.len() {
            (phase + 1, false)
        } else {
            (0, true)
        }
    }
}

impl Default for Schedule {
    /// beginning, main, combat, main, ending.
    fn default() -> Self {
        Self {
            phases: vec![
                Phase::new(
                    "beginning",
                    vec![
                        Step::automatic("untap"),
                        Step::automatic("upkeep"),
                        Step::automatic("draw"),
                    ],
                ),
                Phase::new("main", vec![Step::manual("main")]),
                Phase::new(
                    "combat",
                    vec![
                        Step::automatic("beginning"),
                        Step::manual("declare_attackers"),
                        Step::manual("declare_blockers"),
                        Step::manual("damage"),
                        Step::automatic("end"),
                    ],
                ),
                Phase::new("main", vec![Step::manual("main")]),
                Phase::new(
                    "ending",
                    vec![Step::automatic("end"), Step::automatic("cleanup")],
                ),
            ],
        }
    }
}

impl TryFrom<Vec<Phase>> for Schedule {
    type Error = GameError;

    fn try_from(phases: Vec<Phase>) -> Result<Self> {
        Self::new(phases)
    }
}

impl From<Schedule> for Vec<Phase> {
    fn from(schedule: Schedule) -> Self {
        schedule.phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let schedule = Schedule::default();
        let names: Vec<_> = schedule.phases().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["beginning", "main", "combat", "main", "ending"]);
        assert!(schedule.step(0, 1).is_some_and(|s| s.name == "upkeep" && s.automatic));
        assert!(schedule.step(2, 1).is_some_and(|s| !s.automatic));
        assert_eq!(schedule.step(4, 1).map(|s| s.name.as_str()), Some("cleanup"));
    }

    #[test]
    fn test_default_is_valid() {
        let phases: Vec<Phase> = Schedule::default().into();
        assert!(Schedule::new(phases).is_ok());
    }

    #[test]
    fn test_navigation() {
        let schedule = Schedule::default();

        assert_eq!(schedule.next_step(0, 0), Some(1));
        assert_eq!(schedule.next_step(0, 2), None);
        assert_eq!(schedule.next_phase(1), (2, false));
        assert_eq!(schedule.next_phase(4), (0, true));
    }

    #[test]
    fn test_rejects_empty_schedule() {
        assert!(matches!(Schedule::new(vec![]), Err(GameError::Setup(_))));
    }

    #[test]
    fn test_rejects_empty_phase() {
        let result = Schedule::new(vec![
            Phase::new("main", vec![Step::manual("main")]),
            Phase::new("void", vec![]),
        ]);
        assert_eq!(
            result,
            Err(GameError::Setup("The phase void has no steps.".to_string()))
        );
    }

    #[test]
    fn test_rejects_all_automatic() {
        let result = Schedule::new(vec![Phase::new("auto", vec![Step::automatic("a")])]);
        assert!(matches!(result, Err(GameError::Setup(_))));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"[{"name": "main", "steps": [{"name": "main"}]}]"#;
        let bad = r#"[{"name": "auto", "steps": [{"name": "a", "automatic": true}]}]"#;

        assert!(serde_json::from_str::<Schedule>(ok).is_ok());
        assert!(serde_json::from_str::<Schedule>(bad).is_err());
    }
}
