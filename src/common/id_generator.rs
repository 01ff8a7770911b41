// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., U_K7NP3X for users)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Category (C_)
    Category,
    /// Attribute (A_)
    Attribute,
    /// Language (L_)
    Language,
    /// Coupon (K_) - K for Koupon, C is taken
    Coupon,
    /// Country (N_) - N for Nation
    Country,
    /// Brand (B_)
    Brand,
    /// Testimonial (T_)
    Testimonial,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Category => "C",
            EntityPrefix::Attribute => "A",
            EntityPrefix::Language => "L",
            EntityPrefix::Coupon => "K",
            EntityPrefix::Country => "N",
            EntityPrefix::Brand => "B",
            EntityPrefix::Testimonial => "T",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// # Arguments
/// * `prefix` - The entity type prefix
///
/// # Returns
/// A string in format "PREFIX_XXXXXX" (e.g., "U_K7NP3X")
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

// ============================================================================
// Convenience functions for each entity type
// ============================================================================

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

/// Generate a Category ID (C_XXXXXX)
pub fn generate_category_id() -> String {
    generate_id(EntityPrefix::Category)
}

/// Generate an Attribute ID (A_XXXXXX)
pub fn generate_attribute_id() -> String {
    generate_id(EntityPrefix::Attribute)
}

/// Generate a Language ID (L_XXXXXX)
pub fn generate_language_id() -> String {
    generate_id(EntityPrefix::Language)
}

/// Generate a Coupon ID (K_XXXXXX)
pub fn generate_coupon_id() -> String {
    generate_id(EntityPrefix::Coupon)
}

/// Generate a Country ID (N_XXXXXX)
pub fn generate_country_id() -> String {
    generate_id(EntityPrefix::Country)
}

/// Generate a Brand ID (B_XXXXXX)
pub fn generate_brand_id() -> String {
    generate_id(EntityPrefix::Brand)
}

/// Generate a Testimonial ID (T_XXXXXX)
pub fn generate_testimonial_id() -> String {
    generate_id(EntityPrefix::Testimonial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = generate_user_id();
        assert!(id.starts_with("U_"));
        assert_eq!(id.len(), 8);
    }

    #[test]
    fn test_ids_use_crockford_alphabet() {
        let id = generate_id(EntityPrefix::Coupon);
        let body = id.strip_prefix("K_").unwrap();
        for c in body.bytes() {
            assert!(CROCKFORD_ALPHABET.contains(&c), "unexpected char in id: {}", id);
        }
    }

    #[test]
    fn test_ids_are_unique_enough() {
        let a = generate_brand_id();
        let b = generate_brand_id();
        // 32^6 combinations; a collision here means the RNG is broken
        assert_ne!(a, b);
    }
}
