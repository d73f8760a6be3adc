//! Static training-program catalog.
//!
//! The catalog is configuration, not log data: it never changes at runtime
//! and is never derived from logged sessions. A default program ships with
//! the binary; an alternative YAML file can replace it at startup.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::DayType;

/// Program shipped with the binary.
const DEFAULT_PROGRAM_YAML: &str = include_str!("default_program.yaml");

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read program file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid program definition: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Program must last at least one week")]
    InvalidDuration,

    #[error("Day {0} has no exercises")]
    EmptyDay(DayType),
}

/// The whole program: general description plus one plan per day type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCatalog {
    pub program: ProgramInfo,
    pub days: DayPlans,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramInfo {
    pub name: String,
    pub duration_weeks: u32,
    pub frequency: String,
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub expected_gains: Vec<ExpectedGain>,
    #[serde(default)]
    pub progression_rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedGain {
    pub area: String,
    pub gain: String,
}

/// Plans keyed by day type. Every day type must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlans {
    #[serde(rename = "A")]
    pub a: DayPlan,
    #[serde(rename = "B")]
    pub b: DayPlan,
    #[serde(rename = "C")]
    pub c: DayPlan,
}

/// Description and target loads for one workout day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub name: String,
    pub focus: String,
    pub why: String,
    pub exercises: Vec<PlannedExercise>,
}

/// One prescribed exercise with its set/rep scheme and target load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    pub name: String,
    /// Set × rep-range scheme, e.g. "4×6-10".
    pub sets: String,
    /// Target load as prescribed, e.g. "55 kg" or "BW or assisted".
    pub weight: String,
    /// Emphasis movement for the program's focus areas.
    #[serde(default)]
    pub priority: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ProgramCatalog {
    /// Loads the program shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(DEFAULT_PROGRAM_YAML)
    }

    /// Parses and validates a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: ProgramCatalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Plan for the given day.
    pub fn day(&self, day: DayType) -> &DayPlan {
        match day {
            DayType::A => &self.days.a,
            DayType::B => &self.days.b,
            DayType::C => &self.days.c,
        }
    }

    /// Plans in rotation order.
    pub fn days_in_rotation(&self) -> impl Iterator<Item = (DayType, &DayPlan)> {
        DayType::ROTATION.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Program length in weeks.
    pub fn total_weeks(&self) -> u32 {
        self.program.duration_weeks
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.program.duration_weeks == 0 {
            return Err(CatalogError::InvalidDuration);
        }
        for (day, plan) in self.days_in_rotation() {
            if plan.exercises.is_empty() {
                return Err(CatalogError::EmptyDay(day));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_PROGRAM: &str = r#"
program:
  name: Minimal
  durationWeeks: 4
  frequency: 3× per week
days:
  A:
    name: Push
    focus: Chest
    why: Pressing
    exercises:
      - { name: Bench Press, sets: 3×5, weight: 60 kg }
  B:
    name: Pull
    focus: Back
    why: Rowing
    exercises:
      - { name: Barbell Row, sets: 3×8, weight: 50 kg, priority: true }
  C:
    name: Legs
    focus: Legs
    why: Squatting
    exercises:
      - { name: Squat, sets: 3×5, weight: 80 kg, note: Brace }
"#;

    #[test]
    fn builtin_program_loads() {
        let catalog = ProgramCatalog::builtin().unwrap();
        assert_eq!(catalog.program.name, "Superhero Aesthetics");
        assert_eq!(catalog.total_weeks(), 12);
        assert_eq!(catalog.day(DayType::A).name, "Push + Delts");
        assert_eq!(catalog.day(DayType::B).name, "Pull + Arms");
        assert_eq!(catalog.day(DayType::C).name, "Legs + Upper Finish");
    }

    #[test]
    fn builtin_program_flags_priority_movements() {
        let catalog = ProgramCatalog::builtin().unwrap();
        let priority: Vec<&str> = catalog
            .day(DayType::A)
            .exercises
            .iter()
            .filter(|e| e.priority)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(priority, vec!["Cable Lateral Raise"]);
        assert_eq!(catalog.day(DayType::B).exercises.len(), 7);
    }

    #[test]
    fn days_iterate_in_rotation_order() {
        let catalog = ProgramCatalog::builtin().unwrap();
        let days: Vec<DayType> = catalog.days_in_rotation().map(|(d, _)| d).collect();
        assert_eq!(days, DayType::ROTATION.to_vec());
    }

    #[test]
    fn parses_minimal_program_with_defaults() {
        let catalog = ProgramCatalog::from_yaml_str(MINIMAL_PROGRAM).unwrap();
        assert_eq!(catalog.total_weeks(), 4);
        assert!(catalog.program.focus.is_empty());
        let squat = &catalog.day(DayType::C).exercises[0];
        assert!(!squat.priority);
        assert_eq!(squat.note.as_deref(), Some("Brace"));
    }

    #[test]
    fn rejects_program_missing_a_day() {
        let yaml = MINIMAL_PROGRAM.split("  C:").next().unwrap();
        assert!(matches!(
            ProgramCatalog::from_yaml_str(yaml),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn rejects_zero_week_program() {
        let yaml = MINIMAL_PROGRAM.replace("durationWeeks: 4", "durationWeeks: 0");
        assert!(matches!(
            ProgramCatalog::from_yaml_str(&yaml),
            Err(CatalogError::InvalidDuration)
        ));
    }

    #[test]
    fn loads_program_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_PROGRAM.as_bytes()).unwrap();

        let catalog = ProgramCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.program.name, "Minimal");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ProgramCatalog::from_path(Path::new("/nonexistent/program.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/program.yaml"));
    }

    #[test]
    fn serializes_days_by_identifier() {
        let catalog = ProgramCatalog::builtin().unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["days"]["C"]["name"], "Legs + Upper Finish");
        assert_eq!(json["program"]["durationWeeks"], 12);
    }
}
