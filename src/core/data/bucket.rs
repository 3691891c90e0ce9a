use std::collections::BTreeMap;

/// Translation status of a single catalog entry.
///
/// Classification order matters: an entry flagged fuzzy is `Fuzzy` even
/// when it also carries a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryStatus {
    Translated,
    Fuzzy,
    Untranslated,
}

impl EntryStatus {
    pub fn classify(fuzzy: bool, translated: bool) -> Self {
        if fuzzy {
            EntryStatus::Fuzzy
        } else if translated {
            EntryStatus::Translated
        } else {
            EntryStatus::Untranslated
        }
    }
}

/// Key of a count bucket: one language of one file group.
///
/// Field order gives the language-major ordering used for exports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    /// Language code, e.g. `fr` for `report-fr.po`.
    pub language: String,
    /// File group shared by all translations of one document, e.g. `report`.
    pub group: String,
}

impl BucketKey {
    pub fn new(language: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            group: group.into(),
        }
    }
}

/// Translated / fuzzy / untranslated counters for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountBucket {
    pub translated: usize,
    pub fuzzy: usize,
    pub untranslated: usize,
}

impl CountBucket {
    pub fn record(&mut self, status: EntryStatus) {
        match status {
            EntryStatus::Translated => self.translated += 1,
            EntryStatus::Fuzzy => self.fuzzy += 1,
            EntryStatus::Untranslated => self.untranslated += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.translated + self.fuzzy + self.untranslated
    }

    pub fn merge(&mut self, other: &CountBucket) {
        self.translated += other.translated;
        self.fuzzy += other.fuzzy;
        self.untranslated += other.untranslated;
    }
}

/// Accumulated counters of one catalog directory, keyed by (language, group).
#[derive(Debug, Clone, Default)]
pub struct CatalogStats {
    pub buckets: BTreeMap<BucketKey, CountBucket>,
    /// Number of catalog files that contributed to the buckets.
    pub files_scanned: usize,
}

impl CatalogStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket_mut(&mut self, key: BucketKey) -> &mut CountBucket {
        self.buckets.entry(key).or_default()
    }

    pub fn get(&self, language: &str, group: &str) -> Option<&CountBucket> {
        self.buckets.get(&BucketKey::new(language, group))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BucketKey, &CountBucket)> {
        self.buckets.iter()
    }
}
