use crate::compat::{String, Vec};
use crate::value::ParamValue;

/// Input to [`QueryParameterSet::apply`](crate::QueryParameterSet::apply):
/// a single key/value mapping, or a sequence of updates applied first to last.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Mapping(Vec<(String, ParamValue)>),
    Sequence(Vec<Update>),
}

impl Update {
    pub fn mapping<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self::Mapping(
            values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn sequence<I>(updates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Update>,
    {
        Self::Sequence(updates.into_iter().map(Into::into).collect())
    }
}

impl<K, V> From<Vec<(K, V)>> for Update
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(values: Vec<(K, V)>) -> Self {
        Self::mapping(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_mapping() {
        let update = Update::mapping([("page", "2")]);
        assert_eq!(
            update,
            Update::Mapping(vec![("page".to_string(), ParamValue::from("2"))])
        );
    }

    #[test]
    fn test_nested_sequence() {
        let update = Update::sequence([
            Update::from(vec![("a", "1")]),
            Update::sequence([vec![("a", "2")]]),
        ]);
        let Update::Sequence(items) = update else {
            unreachable!("sequence expected");
        };
        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], Update::Sequence(_)));
    }
}
