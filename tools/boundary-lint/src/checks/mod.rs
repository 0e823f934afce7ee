pub mod boundary_tags;

use serde::Serialize;
use tracing::{debug, info};

use crate::feature::TaggedObject;

/// One flagged feature and the rendered instructions explaining why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFlag {
    pub check: String,
    pub identifier: i64,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub examined: usize,
    pub flags: Vec<CheckFlag>,
}

/// Trait for all feature checks
pub trait Check {
    fn name(&self) -> &str;

    /// Whether the rule applies to this feature at all.
    fn valid_check_for_object(&self, object: &dyn TaggedObject) -> bool;

    /// Evaluate an eligible feature. `None` means it passes.
    fn flag(&self, object: &dyn TaggedObject) -> Option<CheckFlag>;
}

/// Apply `check` to every object in input order.
pub fn run_check<T: TaggedObject>(check: &dyn Check, objects: &[T]) -> CheckResult {
    let mut examined = 0;
    let mut flags = Vec::new();

    for object in objects {
        if !check.valid_check_for_object(object) {
            continue;
        }
        examined += 1;
        if let Some(flag) = check.flag(object) {
            debug!(
                check = check.name(),
                identifier = flag.identifier,
                instructions = flag.instructions.len(),
                "flagged feature"
            );
            flags.push(flag);
        }
    }

    info!(
        check = check.name(),
        total = objects.len(),
        examined,
        flagged = flags.len(),
        "check finished"
    );

    CheckResult {
        name: check.name().to_string(),
        passed: flags.is_empty(),
        examined,
        flags,
    }
}
