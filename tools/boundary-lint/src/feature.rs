use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Read-only view of a tagged map feature. Checks only ever see features
/// through this trait.
pub trait TaggedObject {
    /// OSM identifier; used both in messages and as the flag identifier.
    fn identifier(&self) -> i64;

    fn is_relation(&self) -> bool;

    fn tag(&self, key: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Node,
    Point,
    Line,
    Edge,
    Area,
    Relation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub identifier: i64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, deserialize_with = "present_tags")]
    pub tags: BTreeMap<String, String>,
}

impl Feature {
    pub fn new(identifier: i64, item_type: ItemType) -> Self {
        Self {
            identifier,
            item_type,
            tags: BTreeMap::new(),
        }
    }

    pub fn relation(identifier: i64) -> Self {
        Self::new(identifier, ItemType::Relation)
    }

    /// Builder-style tag insertion, mostly for fixtures.
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }
}

impl TaggedObject for Feature {
    fn identifier(&self) -> i64 {
        self.identifier
    }

    fn is_relation(&self) -> bool {
        self.item_type == ItemType::Relation
    }

    fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

// `"name": null` in input means the tag is not there at all.
fn present_tags<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Option<String>> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_relations_report_as_relations() {
        assert!(Feature::relation(1).is_relation());
        assert!(!Feature::new(1, ItemType::Line).is_relation());
        assert!(!Feature::new(1, ItemType::Area).is_relation());
    }

    #[test]
    fn tag_lookup_distinguishes_absent_from_empty() {
        let feature = Feature::relation(7).with_tag("name", "");
        assert_eq!(feature.tag("name"), Some(""));
        assert_eq!(feature.tag("admin_level"), None);
    }

    #[test]
    fn null_tag_values_deserialize_as_absent() {
        let feature: Feature = serde_json::from_str(
            r#"{"identifier": 3, "type": "relation", "tags": {"name": null, "type": "boundary"}}"#,
        )
        .unwrap();
        assert_eq!(feature.tag("name"), None);
        assert_eq!(feature.tag("type"), Some("boundary"));
    }

    #[test]
    fn missing_tags_object_deserializes_empty() {
        let feature: Feature =
            serde_json::from_str(r#"{"identifier": 4, "type": "node"}"#).unwrap();
        assert!(feature.tags.is_empty());
        assert_eq!(feature.item_type, ItemType::Node);
    }
}
