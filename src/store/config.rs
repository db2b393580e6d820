//! Store configuration

/// Environment variable holding the MongoDB connection string
pub const CONN_STRING_ENV: &str = "MONGO_DB_CONN_STRING";

/// Database holding the member collection
pub const DEFAULT_DATABASE: &str = "members_db";

/// Collection holding member documents
pub const DEFAULT_COLLECTION: &str = "members";

/// Configuration for the MongoDB-backed store
///
/// A missing connection string is not an error here. Resolution is
/// deferred to the first store operation, so the service boots either
/// way and reports the problem per request.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection string, if the environment provided one
    pub conn_string: Option<String>,
    /// Database name
    pub database: String,
    /// Collection name
    pub collection: String,
}

impl StoreConfig {
    /// Build a config with the default database and collection names
    pub fn new(conn_string: Option<String>) -> Self {
        Self {
            conn_string,
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Read the connection string from the environment
    pub fn from_env() -> Self {
        Self::new(std::env::var(CONN_STRING_ENV).ok())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = StoreConfig::new(Some("mongodb://localhost:27017".to_string()));

        assert_eq!(config.database, "members_db");
        assert_eq!(config.collection, "members");
    }

    #[test]
    fn test_missing_conn_string_is_allowed() {
        let config = StoreConfig::new(None);

        assert!(config.conn_string.is_none());
    }
}
