use crate::compat::{BTreeMap, String, ToString, Vec};
use crate::error::{Error, ErrorKind, Result};
use crate::helpers::{segments, split_pair};
use crate::options::Options;
use crate::percent_encode::{decode_component, encode_component_into};
use crate::update::Update;
use crate::value::ParamValue;

/// An insertion-ordered set of query parameters with unique keys.
///
/// Values are never empty: updating a key with a falsy value removes it.
/// A key keeps the position at which it was first inserted until it is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameterSet {
    entries: Vec<(String, String)>,
    options: Options,
}

impl QueryParameterSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            options: Options::default(),
        }
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            entries: Vec::new(),
            options,
        }
    }

    /// Parse a query string (with or without leading `?`) using the default,
    /// lenient options.
    pub fn parse(query: &str) -> Self {
        let pairs = segments(query).map(|segment| {
            let (key, value) = split_pair(segment);
            (key.to_string(), ParamValue::from(value))
        });

        let mut params = Self::new();
        params.update(dedup_pairs(pairs));
        params
    }

    /// Parse a query string with the given options.
    ///
    /// # Errors
    ///
    /// See [`QueryParameterSet::update_from_str`].
    pub fn parse_with(query: &str, options: Options) -> Result<Self> {
        let mut params = Self::with_options(options);
        params.update_from_str(query)?;
        Ok(params)
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Merge a key/value mapping into the set.
    ///
    /// Truthy values are stored (overwriting in place), falsy values remove the key.
    /// Pairs are applied in order, so a later pair wins over an earlier one
    /// with the same key.
    pub fn update<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut slots = Slots::new(core::mem::take(&mut self.entries));
        for (key, value) in values {
            slots.assign(key.into(), value.into());
        }
        self.entries = slots.finish();
        self
    }

    /// Merge a sequence of mappings, first to last.
    pub fn update_many<I, M, K, V>(&mut self, mappings: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for mapping in mappings {
            self.update(mapping);
        }
        self
    }

    /// Apply a mapping or a (possibly nested) sequence of mappings.
    pub fn apply(&mut self, update: Update) -> &mut Self {
        match update {
            Update::Mapping(values) => self.update(values),
            Update::Sequence(updates) => {
                for update in updates {
                    self.apply(update);
                }
                self
            }
        }
    }

    /// Merge a JSON object, or an array of objects, into the set.
    ///
    /// Nothing is changed when the value is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidInput`] for scalars at the top level and for
    /// arrays or objects used as parameter values.
    #[cfg(feature = "serde")]
    pub fn update_json(&mut self, value: &serde_json::Value) -> Result<&mut Self> {
        let update = Update::try_from(value)?;
        Ok(self.apply(update))
    }

    /// Merge a query string of the form `key1=value1&key2=value2`.
    ///
    /// A leading `?` is ignored and empty segments are skipped. Each segment is
    /// split on its first `=`; a segment without `=` is a key with no value and
    /// therefore removes that key. Duplicate keys resolve to their last value.
    ///
    /// Nothing is changed when parsing fails.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`ErrorKind::MalformedSegment`] for a segment
    /// without `=`, and [`ErrorKind::InvalidPercentEncoding`] when an encoded
    /// component does not decode to UTF-8.
    pub fn update_from_str(&mut self, query: &str) -> Result<&mut Self> {
        let mut pairs: Vec<(String, ParamValue)> = Vec::new();
        for segment in segments(query) {
            let (key, value) = split_pair(segment);
            if value.is_none() && self.options.strict {
                tracing::debug!(segment, "rejected query segment without '='");
                return Err(Error::new(ErrorKind::MalformedSegment, segment));
            }

            let key = self.decode(key)?;
            let value = ParamValue::from(value.map(|v| self.decode(v)).transpose()?);
            pairs.push((key, value));
        }

        Ok(self.update(dedup_pairs(pairs)))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    fn decode(&self, component: &str) -> Result<String> {
        if self.options.encode {
            decode_component(component, self.options.strict)
        } else {
            Ok(component.to_string())
        }
    }

    fn push_component(&self, buffer: &mut String, component: &str) {
        if self.options.encode {
            encode_component_into(buffer, component);
        } else {
            buffer.push_str(component);
        }
    }
}

/// Collapse duplicate keys: the last value wins, the first position is kept.
fn dedup_pairs<I>(pairs: I) -> Vec<(String, ParamValue)>
where
    I: IntoIterator<Item = (String, ParamValue)>,
{
    let mut positions: BTreeMap<String, usize> = BTreeMap::new();
    let mut unique: Vec<(String, ParamValue)> = Vec::new();

    for (key, value) in pairs {
        let existing = positions.get(&key).copied();
        if let Some(pos) = existing {
            unique[pos].1 = value;
        } else {
            positions.insert(key.clone(), unique.len());
            unique.push((key, value));
        }
    }

    tracing::debug!(pairs = unique.len(), "parsed query string");
    unique
}

/// Entries opened for a batch of assignments.
///
/// Removed entries leave a hole until `finish`, so positions in the index
/// stay valid for the whole batch.
struct Slots {
    slots: Vec<Option<(String, String)>>,
    positions: BTreeMap<String, usize>,
}

impl Slots {
    fn new(entries: Vec<(String, String)>) -> Self {
        let positions = entries
            .iter()
            .enumerate()
            .map(|(pos, (key, _))| (key.clone(), pos))
            .collect();
        Self {
            slots: entries.into_iter().map(Some).collect(),
            positions,
        }
    }

    fn assign(&mut self, key: String, value: ParamValue) {
        match value.into_text() {
            Some(text) => {
                tracing::trace!(key = %key, value = %text, "set query parameter");
                let existing = self.positions.get(&key).copied();
                match existing {
                    Some(pos) => self.slots[pos] = Some((key, text)),
                    None => {
                        self.positions.insert(key.clone(), self.slots.len());
                        self.slots.push(Some((key, text)));
                    }
                }
            }
            None => {
                tracing::trace!(key = %key, "remove query parameter");
                if let Some(pos) = self.positions.remove(&key) {
                    self.slots[pos] = None;
                }
            }
        }
    }

    fn finish(self) -> Vec<(String, String)> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Renders `?key1=value1&key2=value2`, or an empty string when there are no entries.
impl core::fmt::Display for QueryParameterSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut result = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            result.push(if i == 0 { '?' } else { '&' });
            self.push_component(&mut result, key);
            result.push('=');
            self.push_component(&mut result, value);
        }
        f.write_str(&result)
    }
}

impl core::str::FromStr for QueryParameterSet {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for QueryParameterSet {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.update(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for QueryParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.update(iter);
    }
}

/// Iterator over `(key, value)` pairs of a [`QueryParameterSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a QueryParameterSet {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParameterSet {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
