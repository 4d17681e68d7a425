use toml::value::{Array, Table};

/// Extension trait for [`Table`](toml::Table).
pub trait TomlTableExt {
    /// Extracts the boolean value corresponding to the key.
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Extracts the integer value corresponding to the key and
    /// represents it as `u64` if possible.
    fn get_u64(&self, key: &str) -> Option<u64>;

    /// Extracts the integer value corresponding to the key and
    /// represents it as `usize` if possible.
    fn get_usize(&self, key: &str) -> Option<usize>;

    /// Extracts the string corresponding to the key.
    fn get_str(&self, key: &str) -> Option<&str>;

    /// Extracts the array corresponding to the key.
    fn get_array(&self, key: &str) -> Option<&Array>;

    /// Extracts the array value corresponding to the key and parses it as `Vec<&str>`.
    fn get_str_array(&self, key: &str) -> Option<Vec<&str>>;

    /// Extracts the table corresponding to the key.
    fn get_table(&self, key: &str) -> Option<&Table>;
}

impl TomlTableExt for Table {
    #[inline]
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    #[inline]
    fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key)
            .and_then(|v| v.as_integer())
            .and_then(|i| u64::try_from(i).ok())
    }

    #[inline]
    fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key)
            .and_then(|v| v.as_integer())
            .and_then(|i| usize::try_from(i).ok())
    }

    #[inline]
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    #[inline]
    fn get_array(&self, key: &str) -> Option<&Array> {
        self.get(key).and_then(|v| v.as_array())
    }

    #[inline]
    fn get_str_array(&self, key: &str) -> Option<Vec<&str>> {
        self.get_array(key)
            .map(|values| values.iter().filter_map(|v| v.as_str()).collect())
    }

    #[inline]
    fn get_table(&self, key: &str) -> Option<&Table> {
        self.get(key).and_then(|v| v.as_table())
    }
}

#[cfg(test)]
mod tests {
    use super::TomlTableExt;
    use toml::Table;

    #[test]
    fn it_extracts_typed_values() {
        let table: Table = r#"
            max-file-size = 2048
            allow-data-attr = true
            allowed-tags = ["b", "i", 3]
            negative = -1

            [password]
            min-length = 8
        "#
        .parse()
        .unwrap();
        assert_eq!(table.get_u64("max-file-size"), Some(2048));
        assert_eq!(table.get_bool("allow-data-attr"), Some(true));
        assert_eq!(table.get_str_array("allowed-tags"), Some(vec!["b", "i"]));
        assert_eq!(table.get_usize("negative"), None);
        assert_eq!(
            table.get_table("password").and_then(|t| t.get_usize("min-length")),
            Some(8)
        );
        assert_eq!(table.get_str("missing"), None);
    }
}
