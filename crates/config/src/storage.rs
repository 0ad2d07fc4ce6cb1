/// Object storage credentials resolved from the environment once at startup.
///
/// Each value can come from a server-only variable or its public-exposed
/// twin; the first non-empty one wins. Missing values are not an error:
/// the server falls back to local storage instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub bucket: Option<String>,
    pub base_path: String,
}

const REGION_VARS: &[&str] = &[
    "OSS_REGION",
    "NEXT_PUBLIC_OSS_REGION",
    "PUBLIC_OSS_REGION",
];
const ACCESS_KEY_ID_VARS: &[&str] = &[
    "OSS_ACCESS_KEY_ID",
    "NEXT_PUBLIC_OSS_ACCESS_KEY_ID",
    "PUBLIC_OSS_ACCESS_KEY_ID",
];
const ACCESS_KEY_SECRET_VARS: &[&str] = &[
    "OSS_ACCESS_KEY_SECRET",
    "NEXT_PUBLIC_OSS_ACCESS_KEY_SECRET",
    "PUBLIC_OSS_ACCESS_KEY_SECRET",
];
const BUCKET_VARS: &[&str] = &[
    "OSS_BUCKET",
    "NEXT_PUBLIC_OSS_BUCKET",
    "PUBLIC_OSS_BUCKET",
];
const BASE_PATH_VARS: &[&str] = &[
    "OSS_BASE_PATH",
    "NEXT_PUBLIC_OSS_BASE_PATH",
    "PUBLIC_OSS_BASE_PATH",
];

impl StorageConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |names: &[&str]| {
            names
                .iter()
                .filter_map(|&name| lookup(name))
                .find(|value| !value.is_empty())
        };

        Self {
            region: resolve(REGION_VARS),
            access_key_id: resolve(ACCESS_KEY_ID_VARS),
            access_key_secret: resolve(ACCESS_KEY_SECRET_VARS),
            bucket: resolve(BUCKET_VARS),
            base_path: resolve(BASE_PATH_VARS).unwrap_or_default(),
        }
    }

    /// Names of the required values that are absent
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("region", &self.region),
            ("accessKeyId", &self.access_key_id),
            ("accessKeySecret", &self.access_key_secret),
            ("bucket", &self.bucket),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn use_remote_storage(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
