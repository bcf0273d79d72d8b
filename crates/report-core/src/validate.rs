use crate::fields::RequiredField;

/// Returns the required fields whose keyword does not occur in `text`.
///
/// Matching is exact substring containment with no case or whitespace
/// normalization. The result follows [`RequiredField::ALL`] order and is empty
/// when the report is complete.
pub fn validate(text: &str) -> Vec<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| !text.contains(field.keyword()))
        .collect()
}
