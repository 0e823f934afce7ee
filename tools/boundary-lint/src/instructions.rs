use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The six ways a boundary relation can fail the tag rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectKind {
    MissingName,
    EmptyName,
    MissingAdminLevel,
    EmptyAdminLevel,
    NonNumericAdminLevel,
    AdminLevelOutsideRange,
}

impl DefectKind {
    pub const ALL: [DefectKind; 6] = [
        DefectKind::MissingName,
        DefectKind::EmptyName,
        DefectKind::MissingAdminLevel,
        DefectKind::EmptyAdminLevel,
        DefectKind::NonNumericAdminLevel,
        DefectKind::AdminLevelOutsideRange,
    ];

    /// English template used when no localized one is configured.
    /// `{0}` identifier, `{1}` raw value, `{2}` minimum, `{3}` maximum.
    pub fn fallback_template(self) -> &'static str {
        match self {
            DefectKind::MissingName => "Boundary relation {0} is missing the name tag.",
            DefectKind::EmptyName => {
                "Boundary relation {0} is missing a value for the name tag."
            }
            DefectKind::MissingAdminLevel => {
                "Administrative boundary relation {0} is missing the admin_level tag."
            }
            DefectKind::EmptyAdminLevel => {
                "Boundary relation {0} has an empty value for the admin_level tag (admin_level = {1})."
            }
            DefectKind::NonNumericAdminLevel => {
                "Boundary relation {0} has an invalid value for the admin_level tag (admin_level = {1}); must be an integer between {2} and {3}."
            }
            DefectKind::AdminLevelOutsideRange => {
                "Boundary relation {0} has an invalid value for the admin_level tag (admin_level = {1}); must be between {2} and {3}."
            }
        }
    }
}

/// Localized templates, falling back to the built-in English ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instructions {
    localized: BTreeMap<DefectKind, String>,
}

impl Instructions {
    pub fn new(localized: BTreeMap<DefectKind, String>) -> Self {
        Self { localized }
    }

    pub fn template(&self, kind: DefectKind) -> &str {
        self.localized
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.fallback_template())
    }

    pub fn render(&self, kind: DefectKind, arguments: &[String]) -> String {
        render_template(self.template(kind), arguments)
    }
}

/// Substitute `{N}` placeholders. Placeholders without a matching argument,
/// and any other braces, are copied through unchanged.
pub fn render_template(template: &str, arguments: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let argument = arguments.get(index)?;
            Some((argument, close))
        });

        match substituted {
            Some((argument, close)) => {
                out.push_str(argument);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
