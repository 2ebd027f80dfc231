//! Built-in catalog: suggested academic fields and generation limits.

/// Minimum number of fields a generation request must integrate.
pub const MIN_FIELDS: usize = 2;

/// Smallest batch a single generation call may request.
pub const MIN_IDEA_COUNT: u32 = 1;

/// Largest batch a single generation call may request.
pub const MAX_IDEA_COUNT: u32 = 10;

pub const DEFAULT_IDEA_COUNT: u32 = 3;

/// Fields offered by the field selector. Users may add any custom field on top.
pub const ACADEMIC_FIELDS: [&str; 12] = [
    "Artificial Intelligence",
    "Neuroscience",
    "Art History",
    "Theoretical Physics",
    "Anthropology",
    "Environmental Science",
    "Philosophy",
    "Molecular Biology",
    "Sociology",
    "Jurisprudence",
    "Ethnomusicology",
    "Public Health",
];

/// Whether `count` is a valid idea count for one generation call.
#[must_use]
pub const fn is_valid_count(count: u32) -> bool {
    count >= MIN_IDEA_COUNT && count <= MAX_IDEA_COUNT
}

/// Case-insensitive substring search over [`ACADEMIC_FIELDS`].
#[must_use]
pub fn search_fields(term: &str) -> Vec<&'static str> {
    let needle = term.trim().to_lowercase();
    ACADEMIC_FIELDS
        .iter()
        .copied()
        .filter(|field| needle.is_empty() || field.to_lowercase().contains(&needle))
        .collect()
}
