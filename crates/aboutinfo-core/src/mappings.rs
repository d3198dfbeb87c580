//! Positional substitution values read from the mappings bundle.

use crate::bundle::Bundle;

/// Ordered values for `{0}`, `{1}`, … placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable(Vec<String>);

impl MappingTable {
    /// Collect keys `"0"`, `"1"`, … in order, stopping at the first missing index.
    pub fn from_bundle(bundle: Option<&Bundle>) -> Self {
        let Some(bundle) = bundle else {
            return MappingTable::default();
        };
        MappingTable(
            (0usize..)
                .map_while(|i| bundle.get(&i.to_string()).map(str::to_owned))
                .collect(),
        )
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for MappingTable {
    fn from(values: Vec<String>) -> Self {
        MappingTable(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_first_gap() {
        let b = Bundle::parse("0=a\n1=b\n3=d\n").unwrap();
        let t = MappingTable::from_bundle(Some(&b));
        assert_eq!(t.as_slice(), ["a", "b"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(2), None);
    }

    #[test]
    fn no_zero_key_is_empty() {
        let b = Bundle::parse("1=b\n2=c\n").unwrap();
        assert!(MappingTable::from_bundle(Some(&b)).is_empty());
    }

    #[test]
    fn absent_bundle_is_empty() {
        assert!(MappingTable::from_bundle(None).is_empty());
    }

    #[test]
    fn padded_keys_are_not_indices() {
        let b = Bundle::parse("0=a\n01=b\n").unwrap();
        assert_eq!(MappingTable::from_bundle(Some(&b)).as_slice(), ["a"]);
    }

    #[test]
    fn empty_values_are_kept() {
        let b = Bundle::parse("0=\n1=x\n").unwrap();
        assert_eq!(MappingTable::from_bundle(Some(&b)).as_slice(), ["", "x"]);
    }
}
