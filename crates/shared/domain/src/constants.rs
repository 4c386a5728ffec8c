/// Key holding the class reference (or its qualified name) in a mapping.
pub const COSMOLOGY: &str = "cosmology";
/// Key holding the instance name.
pub const NAME: &str = "name";
/// Key holding the nested metadata mapping.
pub const META: &str = "meta";

/// Keys with a fixed meaning in every mapping representation.
pub const RESERVED_KEYS: [&str; 3] = [COSMOLOGY, NAME, META];

#[must_use]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
