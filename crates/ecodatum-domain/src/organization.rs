//! Organization rules.

/// Required length, in UTF-8 bytes, of an organization code.
pub const ORGANIZATION_CODE_LENGTH: usize = 6;

/// An organization code is valid when its UTF-8 encoding is exactly
/// [`ORGANIZATION_CODE_LENGTH`] bytes long.
pub fn is_valid_organization_code(code: &str) -> bool {
    code.len() == ORGANIZATION_CODE_LENGTH
}
