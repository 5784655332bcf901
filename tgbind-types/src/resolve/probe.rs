//! Partial read of a JSON object: capture a few named fields, skip the rest.

use std::fmt;

use serde::de::{DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_json::Value;

/// The values of the probed keys, by key position.
pub(super) struct Probe {
    values: Vec<Option<Value>>,
}

impl Probe {
    /// Read `keys` from the top-level object in `raw`.
    ///
    /// Fails when `raw` is not a single JSON object.
    pub(super) fn read(raw: &[u8], keys: &[&str]) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_slice(raw);
        let probe = Seed { keys }.deserialize(&mut de)?;
        de.end()?;
        Ok(probe)
    }

    pub(super) fn take(&mut self, index: usize) -> Option<Value> {
        self.values.get_mut(index).and_then(Option::take)
    }

    /// The value at `index` when it is present and not `null`.
    pub(super) fn present(&self, index: usize) -> Option<&Value> {
        self.values.get(index)?.as_ref().filter(|v| !v.is_null())
    }
}

struct Seed<'k> {
    keys: &'k [&'k str],
}

impl<'de> DeserializeSeed<'de> for Seed<'_> {
    type Value = Probe;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Probe, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for Seed<'_> {
    type Value = Probe;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Probe, A::Error> {
        let mut values = vec![None; self.keys.len()];
        while let Some(key) = map.next_key::<String>()? {
            match self.keys.iter().position(|k| *k == key) {
                Some(i) => values[i] = Some(map.next_value::<Value>()?),
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(Probe { values })
    }
}
