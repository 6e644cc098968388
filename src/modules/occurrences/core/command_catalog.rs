use serde::Deserialize;
use serde_json::{Map, Value, json};

/// The read-only catalog of banking command codes, in either storage form.
///
/// A sequence is served exactly as stored, whatever its records look like.
/// A mapping is read as command number to description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CommandCatalog {
    Entries(Vec<Value>),
    ByNumber(Map<String, Value>),
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::ByNumber(Map::new())
    }
}

impl CommandCatalog {
    pub fn len(&self) -> usize {
        match self {
            Self::Entries(entries) => entries.len(),
            Self::ByNumber(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the catalog into records. A sequence is kept as stored; a
    /// mapping becomes one `{numero, descricao}` record per key, integer keys
    /// first in numeric order, then the rest alphabetically.
    pub fn into_entries(self) -> Vec<Value> {
        match self {
            Self::Entries(entries) => entries,
            Self::ByNumber(map) => {
                let mut pairs: Vec<(String, Value)> = map.into_iter().collect();
                pairs.sort_by(|(a, _), (b, _)| sort_key(a).cmp(&sort_key(b)));
                pairs
                    .into_iter()
                    .map(|(number, description)| json!({"numero": number, "descricao": description}))
                    .collect()
            }
        }
    }
}

fn sort_key(key: &str) -> (u8, u64, &str) {
    match key.parse::<u64>() {
        Ok(n) if n.to_string() == key => (0, n, key),
        _ => (1, 0, key),
    }
}
