use super::Value;

use indexmap::IndexMap;

/// A raw row: column name to cell value, in the order the columns arrived.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Sets a column, returning the previous value. A column that already
    /// exists keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.columns.insert(column.into(), value.into())
    }

    /// Removes a column, preserving the order of the remaining columns.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.columns.shift_remove(column)
    }

    pub fn retain(&mut self, mut f: impl FnMut(&str, &Value) -> bool) {
        self.columns.retain(|column, value| f(column, value));
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.columns
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Row {
    fn from_iter<T: IntoIterator<Item = (S, Value)>>(iter: T) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value))
                .collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, Value)> for Row {
    fn extend<T: IntoIterator<Item = (S, Value)>>(&mut self, iter: T) {
        self.columns.extend(
            iter.into_iter()
                .map(|(column, value)| (column.into(), value)),
        );
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
