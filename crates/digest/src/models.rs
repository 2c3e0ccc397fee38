use serde::{Deserialize, Deserializer};

/// The `node.json` response envelope. Every api-d7 collection read returns
/// its records under a `list` key.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeList<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

/// A project node as returned by
/// `node.json?field_project_machine_name=<name>`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectNode {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub nid: u64,
    pub title: String,
    pub url: String,
}

/// An issue node as returned by the filtered `type=project_issue` read.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueNode {
    pub title: String,
    pub url: String,
    #[serde(deserialize_with = "i64_from_string_or_number")]
    pub changed: i64,
}

// api-d7 serializes numeric node fields inconsistently: sometimes JSON
// numbers, sometimes decimal strings. Accept both forms.

fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn i64_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
