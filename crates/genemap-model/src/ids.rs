//! Ensembl identifier helpers.

/// Remove a trailing `.N` version suffix from an Ensembl identifier.
///
/// Only a final dot followed by one or more ASCII digits counts as a version;
/// anything else is returned unchanged.
///
/// ```
/// use genemap_model::strip_version;
///
/// assert_eq!(strip_version("ENSG00000141510.16"), "ENSG00000141510");
/// assert_eq!(strip_version("ENSG00000141510"), "ENSG00000141510");
/// assert_eq!(strip_version("HLA-A.x"), "HLA-A.x");
/// ```
pub fn strip_version(id: &str) -> &str {
    match id.rfind('.') {
        Some(dot) if is_version(&id[dot + 1..]) => &id[..dot],
        _ => id,
    }
}

/// Returns true if the identifier carries a `.N` version suffix.
pub fn has_version(id: &str) -> bool {
    strip_version(id).len() != id.len()
}

fn is_version(suffix: &str) -> bool {
    !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
}
