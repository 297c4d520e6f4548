use std::fmt;

use serde::de::{Deserializer, Error as _, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Goes negative when the server reports more
    /// participants than seats; callers render it unclamped.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn upsert(&mut self, name: String, activity: Activity) {
        // Repeated keys: last value wins, first position kept (JSON.parse semantics).
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = Catalog::default();
        for (name, activity) in iter {
            catalog.upsert(name, activity);
        }
        catalog
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping activity names to activities")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Catalog, M::Error> {
        let mut catalog = Catalog::default();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            // Derived struct decoding would also take a positional array.
            if !value.is_object() {
                return Err(M::Error::custom(format!(
                    "activity {name:?} is not an object"
                )));
            }
            let activity = serde_json::from_value(value).map_err(M::Error::custom)?;
            catalog.upsert(name, activity);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// 2xx body of signup/unregister.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Confirmation {
    pub message: String,
}

/// Error body of signup/unregister. Validation errors carry a list in
/// `detail`, so only a non-empty string counts as a usable message.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Rejection {
    #[serde(default)]
    detail: Option<Value>,
}

impl Rejection {
    pub fn detail(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
    }
}
