//! The fixed commodity catalog.
//!
//! Islands only ever quote prices for these six goods. Catalog order is the
//! canonical display order everywhere (selectors, legend, traded-commodity
//! lists), never the order keys happen to show up in the dataset.

/// Static metadata for one commodity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommodityMeta {
    /// Key used in the dataset's price maps.
    pub key: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl CommodityMeta {
    /// "🥇 Gold", as the commodity shows up in selectors.
    pub fn display(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

pub static CATALOG: [CommodityMeta; 6] = [
    CommodityMeta { key: "ca", icon: "🐟", label: "Fish" },
    CommodityMeta { key: "go", icon: "🪵", label: "Wood" },
    CommodityMeta { key: "da", icon: "🪨", label: "Stone" },
    CommodityMeta { key: "bac", icon: "🪙", label: "Silver" },
    CommodityMeta { key: "vang", icon: "🥇", label: "Gold" },
    CommodityMeta { key: "kimcuong", icon: "💎", label: "Diamond" },
];

/// Look up catalog metadata by dataset key.
pub fn commodity_meta(key: &str) -> Option<&'static CommodityMeta> {
    CATALOG.iter().find(|meta| meta.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_catalog_entry() {
        for meta in &CATALOG {
            assert_eq!(commodity_meta(meta.key), Some(meta));
        }
    }

    #[test]
    fn lookup_rejects_unknown_keys() {
        assert_eq!(commodity_meta("plutonium"), None);
        assert_eq!(commodity_meta(""), None);
    }
}
