//! Administrative boundary relations must carry a usable `name` and an
//! `admin_level` that is an integer inside the configured range.

use std::ops::RangeInclusive;

use crate::checks::{Check, CheckFlag};
use crate::feature::TaggedObject;
use crate::instructions::{DefectKind, Instructions};
use crate::tags::{
    self, AdministrativeClassifier, BoundaryValues, ADMIN_LEVEL_KEY, BOUNDARY_KEY,
    BOUNDARY_RELATION_TYPE, NAME_KEY, TYPE_KEY,
};

pub const CHECK_NAME: &str = "BoundaryTagCheck";

/// Longest `admin_level` literal that is compared numerically. Anything
/// longer is out of range without being parsed.
const MAX_ADMIN_LEVEL_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    MissingName {
        identifier: i64,
    },
    EmptyName {
        identifier: i64,
    },
    MissingAdminLevel {
        identifier: i64,
    },
    EmptyAdminLevel {
        identifier: i64,
        raw: String,
    },
    NonNumericAdminLevel {
        identifier: i64,
        raw: String,
        minimum: i64,
        maximum: i64,
    },
    AdminLevelOutsideRange {
        identifier: i64,
        raw: String,
        minimum: i64,
        maximum: i64,
    },
}

impl Defect {
    pub fn kind(&self) -> DefectKind {
        match self {
            Defect::MissingName { .. } => DefectKind::MissingName,
            Defect::EmptyName { .. } => DefectKind::EmptyName,
            Defect::MissingAdminLevel { .. } => DefectKind::MissingAdminLevel,
            Defect::EmptyAdminLevel { .. } => DefectKind::EmptyAdminLevel,
            Defect::NonNumericAdminLevel { .. } => DefectKind::NonNumericAdminLevel,
            Defect::AdminLevelOutsideRange { .. } => DefectKind::AdminLevelOutsideRange,
        }
    }

    /// Positional template arguments: identifier, raw value, minimum, maximum.
    pub fn arguments(&self) -> Vec<String> {
        match self {
            Defect::MissingName { identifier }
            | Defect::EmptyName { identifier }
            | Defect::MissingAdminLevel { identifier } => vec![identifier.to_string()],
            Defect::EmptyAdminLevel { identifier, raw } => {
                vec![identifier.to_string(), raw.clone()]
            }
            Defect::NonNumericAdminLevel {
                identifier,
                raw,
                minimum,
                maximum,
            }
            | Defect::AdminLevelOutsideRange {
                identifier,
                raw,
                minimum,
                maximum,
            } => vec![
                identifier.to_string(),
                raw.clone(),
                minimum.to_string(),
                maximum.to_string(),
            ],
        }
    }

    pub fn render(&self, instructions: &Instructions) -> String {
        instructions.render(self.kind(), &self.arguments())
    }
}

/// Defects for one feature, name defect first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    defects: Vec<Defect>,
}

impl ValidationOutcome {
    pub fn is_empty(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }

    pub fn kinds(&self) -> Vec<DefectKind> {
        self.defects.iter().map(Defect::kind).collect()
    }
}

pub struct BoundaryTagCheck<C = BoundaryValues> {
    classifier: C,
    admin_levels: RangeInclusive<i64>,
    instructions: Instructions,
}

impl BoundaryTagCheck {
    /// Default bounds, English instructions, `boundary=administrative` only.
    pub fn administrative() -> Self {
        Self::new(BoundaryValues::default())
    }
}

impl Default for BoundaryTagCheck {
    fn default() -> Self {
        Self::administrative()
    }
}

impl<C: AdministrativeClassifier> BoundaryTagCheck<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            admin_levels: tags::DEFAULT_MINIMUM_ADMIN_LEVEL..=tags::DEFAULT_MAXIMUM_ADMIN_LEVEL,
            instructions: Instructions::default(),
        }
    }

    /// Panics if `minimum > maximum`.
    pub fn with_admin_levels(mut self, minimum: i64, maximum: i64) -> Self {
        assert!(
            minimum <= maximum,
            "admin level minimum {minimum} is greater than maximum {maximum}"
        );
        self.admin_levels = minimum..=maximum;
        self
    }

    pub fn with_instructions(mut self, instructions: Instructions) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn minimum_admin_level(&self) -> i64 {
        *self.admin_levels.start()
    }

    pub fn maximum_admin_level(&self) -> i64 {
        *self.admin_levels.end()
    }

    pub fn is_eligible(&self, object: &dyn TaggedObject) -> bool {
        object.is_relation()
            && object.tag(TYPE_KEY) == Some(BOUNDARY_RELATION_TYPE)
            && object
                .tag(BOUNDARY_KEY)
                .is_some_and(|value| self.classifier.is_administrative(value))
    }

    pub fn check_name(&self, object: &dyn TaggedObject) -> Option<Defect> {
        let identifier = object.identifier();
        match object.tag(NAME_KEY) {
            None => Some(Defect::MissingName { identifier }),
            Some(name) if tags::is_blank(name) => Some(Defect::EmptyName { identifier }),
            Some(_) => None,
        }
    }

    pub fn check_admin_level(&self, object: &dyn TaggedObject) -> Option<Defect> {
        let identifier = object.identifier();
        let raw = match object.tag(ADMIN_LEVEL_KEY) {
            Some(raw) => raw,
            None => return Some(Defect::MissingAdminLevel { identifier }),
        };

        if tags::is_blank(raw) {
            return Some(Defect::EmptyAdminLevel {
                identifier,
                raw: raw.to_string(),
            });
        }

        let minimum = self.minimum_admin_level();
        let maximum = self.maximum_admin_level();

        if !tags::is_valid_integer(raw) {
            return Some(Defect::NonNumericAdminLevel {
                identifier,
                raw: raw.to_string(),
                minimum,
                maximum,
            });
        }

        let in_range = raw.len() <= MAX_ADMIN_LEVEL_LENGTH
            && raw
                .parse::<i64>()
                .is_ok_and(|level| self.admin_levels.contains(&level));
        if in_range {
            None
        } else {
            Some(Defect::AdminLevelOutsideRange {
                identifier,
                raw: raw.to_string(),
                minimum,
                maximum,
            })
        }
    }

    pub fn evaluate(&self, object: &dyn TaggedObject) -> ValidationOutcome {
        let defects = [self.check_name(object), self.check_admin_level(object)]
            .into_iter()
            .flatten()
            .collect();
        ValidationOutcome { defects }
    }
}

impl<C: AdministrativeClassifier> Check for BoundaryTagCheck<C> {
    fn name(&self) -> &str {
        CHECK_NAME
    }

    fn valid_check_for_object(&self, object: &dyn TaggedObject) -> bool {
        self.is_eligible(object)
    }

    fn flag(&self, object: &dyn TaggedObject) -> Option<CheckFlag> {
        let outcome = self.evaluate(object);
        if outcome.is_empty() {
            return None;
        }

        Some(CheckFlag {
            check: CHECK_NAME.to_string(),
            identifier: object.identifier(),
            instructions: outcome
                .defects()
                .iter()
                .map(|defect| defect.render(&self.instructions))
                .collect(),
        })
    }
}
