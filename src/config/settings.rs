//! Settings model

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

/// How documents and values are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Override tags applied when no `--override` flag is given
    #[serde(deserialize_with = "deserialize_tag_list")]
    pub overrides: Vec<String>,
    pub format: OutputFormat,
}

impl Settings {
    /// Layer CLI flags on top of file and environment settings.
    pub fn with_cli(mut self, overrides: Option<Vec<String>>, format: Option<OutputFormat>) -> Self {
        if let Some(tags) = overrides {
            self.overrides = tags;
        }
        if let Some(fmt) = format {
            self.format = fmt;
        }
        self
    }
}

/// Accept either a list of tags or one comma-separated string.
///
/// Env values arrive already typed (`2024` is an integer, `true` a bool), so
/// scalar tags are accepted and turned back into strings.
fn deserialize_tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TagItem {
        Text(String),
        Integer(i64),
        Float(f64),
        Flag(bool),
    }

    impl TagItem {
        fn into_tags(self) -> Vec<String> {
            match self {
                TagItem::Text(joined) => split_tags(&joined),
                TagItem::Integer(i) => vec![i.to_string()],
                TagItem::Float(f) => vec![f.to_string()],
                TagItem::Flag(b) => vec![b.to_string()],
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TagList {
        One(TagItem),
        Items(Vec<TagItem>),
    }

    let tags = match TagList::deserialize(deserializer)? {
        TagList::One(item) => item.into_tags(),
        TagList::Items(items) => items.into_iter().flat_map(TagItem::into_tags).collect(),
    };
    Ok(tags)
}

/// Split a comma-separated tag string, trimming and dropping empty parts.
pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags(" production, eu ,,"), vec!["production", "eu"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_cli_flags_take_precedence() {
        let settings = Settings { overrides: vec!["staging".into()], format: OutputFormat::Text };
        let merged = settings.with_cli(Some(vec!["production".into()]), Some(OutputFormat::Json));
        assert_eq!(merged.overrides, vec!["production"]);
        assert_eq!(merged.format, OutputFormat::Json);
    }

    #[test]
    fn test_absent_cli_flags_keep_settings() {
        let settings = Settings { overrides: vec!["staging".into()], format: OutputFormat::Json };
        let merged = settings.clone().with_cli(None, None);
        assert_eq!(merged, settings);
    }

    #[test]
    fn test_deserialize_joined_and_list_forms() {
        let joined: Settings = serde_json::from_str(r#"{"overrides": "a, b"}"#).unwrap();
        assert_eq!(joined.overrides, vec!["a", "b"]);

        let list: Settings =
            serde_json::from_str(r#"{"overrides": [" a ", "", "b"], "format": "json"}"#).unwrap();
        assert_eq!(list.overrides, vec!["a", "b"]);
        assert_eq!(list.format, OutputFormat::Json);
    }

    #[test]
    fn test_deserialize_scalar_tags() {
        let number: Settings = serde_json::from_str(r#"{"overrides": 2024}"#).unwrap();
        assert_eq!(number.overrides, vec!["2024"]);

        let flag: Settings = serde_json::from_str(r#"{"overrides": true}"#).unwrap();
        assert_eq!(flag.overrides, vec!["true"]);

        let mixed: Settings =
            serde_json::from_str(r#"{"overrides": [2024, "eu", false]}"#).unwrap();
        assert_eq!(mixed.overrides, vec!["2024", "eu", "false"]);
    }
}
