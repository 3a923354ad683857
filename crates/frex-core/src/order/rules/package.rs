//! Unit label to package type mapping.

use std::collections::BTreeMap;

use crate::models::order::PackageType;

/// Immutable mapping from document unit labels to package types.
///
/// Labels not in the table resolve to the default, `PalletOther`.
#[derive(Debug, Clone)]
pub struct PackageTypeMap {
    entries: BTreeMap<String, PackageType>,
    default: PackageType,
}

impl PackageTypeMap {
    /// Table for labels used in Access Logistic orders.
    pub fn builtin() -> Self {
        let entries = [
            ("EW-Paletten", PackageType::PalletOther),
            ("Ladung", PackageType::Carton),
            ("Stück", PackageType::Other),
        ]
        .into_iter()
        .map(|(label, ty)| (label.to_string(), ty))
        .collect();

        Self {
            entries,
            default: PackageType::PalletOther,
        }
    }

    /// Add entries, overriding existing labels.
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, PackageType)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Package type for a unit label.
    pub fn resolve(&self, label: &str) -> PackageType {
        self.entries.get(label.trim()).copied().unwrap_or(self.default)
    }
}

impl Default for PackageTypeMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_labels() {
        let map = PackageTypeMap::builtin();
        assert_eq!(map.resolve("EW-Paletten"), PackageType::PalletOther);
        assert_eq!(map.resolve("Ladung"), PackageType::Carton);
        assert_eq!(map.resolve(" Stück "), PackageType::Other);
    }

    #[test]
    fn test_unknown_label_defaults_to_pallet() {
        assert_eq!(PackageTypeMap::builtin().resolve("Gitterbox"), PackageType::PalletOther);
    }

    #[test]
    fn test_extra_entries_override() {
        let map = PackageTypeMap::builtin().with_entries([
            ("Gitterbox".to_string(), PackageType::Other),
            ("Ladung".to_string(), PackageType::Other),
        ]);
        assert_eq!(map.resolve("Gitterbox"), PackageType::Other);
        assert_eq!(map.resolve("Ladung"), PackageType::Other);
    }
}
