use std::env;
use std::path::PathBuf;

/// Locations of the product and cart JSON documents.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub products_file: PathBuf,
    pub carts_file: PathBuf,
}

impl StorageConfig {
    /// Load storage locations from environment variables
    ///
    /// Environment variables:
    /// - DATA_DIR: Directory holding the documents (default: "./data")
    /// - PRODUCTS_FILE: Product document path (default: "$DATA_DIR/products.json")
    /// - CARTS_FILE: Cart document path (default: "$DATA_DIR/carts.json")
    pub fn from_env() -> Self {
        Self::resolve(
            env::var("DATA_DIR").ok(),
            env::var("PRODUCTS_FILE").ok(),
            env::var("CARTS_FILE").ok(),
        )
    }

    fn resolve(
        data_dir: Option<String>,
        products_file: Option<String>,
        carts_file: Option<String>,
    ) -> Self {
        let data_dir = PathBuf::from(non_empty(data_dir).unwrap_or_else(|| "./data".to_string()));

        Self {
            products_file: non_empty(products_file)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("products.json")),
            carts_file: non_empty(carts_file)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("carts.json")),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_place_documents_in_default_data_dir() {
        // Act
        let config = StorageConfig::resolve(None, None, None);

        // Assert
        assert_eq!(config.products_file, PathBuf::from("./data/products.json"));
        assert_eq!(config.carts_file, PathBuf::from("./data/carts.json"));
    }

    #[test]
    fn should_join_file_names_to_custom_data_dir() {
        let config = StorageConfig::resolve(Some("/var/lib/store".to_string()), None, None);

        assert_eq!(
            config.products_file,
            PathBuf::from("/var/lib/store/products.json")
        );
        assert_eq!(config.carts_file, PathBuf::from("/var/lib/store/carts.json"));
    }

    #[test]
    fn should_prefer_explicit_file_paths() {
        let config = StorageConfig::resolve(
            Some("/srv".to_string()),
            Some("/tmp/p.json".to_string()),
            Some(" ".to_string()),
        );

        assert_eq!(config.products_file, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.carts_file, PathBuf::from("/srv/carts.json"));
    }
}
