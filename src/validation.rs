//! Field validation for profile records.
//!
//! Names and avatars are required content: they must be non-empty and fit
//! their length bound. Bio and website only carry a length bound and may be
//! empty or absent. All checks are pure length predicates with no side
//! effects; the registry maps each failure to its stable error code.

use soroban_sdk::String;

use crate::RegistryError;

/// Maximum name length in bytes.
pub const MAX_NAME_LENGTH: u32 = 50;

/// Maximum bio length in bytes.
pub const MAX_BIO_LENGTH: u32 = 160;

/// Maximum avatar reference length in bytes (IPFS CID, URL, etc.).
pub const MAX_AVATAR_LENGTH: u32 = 200;

/// Maximum website URL length in bytes.
pub const MAX_WEBSITE_LENGTH: u32 = 100;

/// Validate a profile name: non-empty, at most [`MAX_NAME_LENGTH`] bytes.
pub fn validate_name(name: &String) -> Result<(), RegistryError> {
    let len = name.len();
    if len == 0 || len > MAX_NAME_LENGTH {
        return Err(RegistryError::InvalidName);
    }
    Ok(())
}

/// Validate an avatar reference: non-empty, at most [`MAX_AVATAR_LENGTH`] bytes.
pub fn validate_avatar(avatar: &String) -> Result<(), RegistryError> {
    let len = avatar.len();
    if len == 0 || len > MAX_AVATAR_LENGTH {
        return Err(RegistryError::InvalidAvatar);
    }
    Ok(())
}

/// Validate a bio: may be empty, at most [`MAX_BIO_LENGTH`] bytes.
pub fn validate_bio(bio: &String) -> Result<(), RegistryError> {
    if bio.len() > MAX_BIO_LENGTH {
        return Err(RegistryError::InvalidInput);
    }
    Ok(())
}

/// Validate an optional website URL: absent is fine, present must fit
/// [`MAX_WEBSITE_LENGTH`] bytes.
pub fn validate_website(website: &Option<String>) -> Result<(), RegistryError> {
    if let Some(url) = website {
        if url.len() > MAX_WEBSITE_LENGTH {
            return Err(RegistryError::InvalidInput);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // 59 chars, over the name bound.
    const OVER_NAME: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx";

    #[test]
    fn test_name_bounds() {
        let env = Env::default();

        assert!(validate_name(&String::from_str(&env, "john_doe")).is_ok());
        assert!(validate_name(&String::from_str(&env, "a")).is_ok());

        assert_eq!(
            validate_name(&String::from_str(&env, "")),
            Err(RegistryError::InvalidName)
        );
        assert_eq!(
            validate_name(&String::from_str(&env, OVER_NAME)),
            Err(RegistryError::InvalidName)
        );
    }

    #[test]
    fn test_avatar_bounds() {
        let env = Env::default();

        assert!(validate_avatar(&String::from_str(
            &env,
            "QmXoYpVyKxQXGxuNqXR7uo8rqjNVvQxQxQxQxQxQxQxQx"
        ))
        .is_ok());

        assert_eq!(
            validate_avatar(&String::from_str(&env, "")),
            Err(RegistryError::InvalidAvatar)
        );
    }

    #[test]
    fn test_bio_may_be_empty() {
        let env = Env::default();
        assert!(validate_bio(&String::from_str(&env, "")).is_ok());
        assert!(validate_bio(&String::from_str(&env, "Software developer")).is_ok());
    }

    #[test]
    fn test_website_optional() {
        let env = Env::default();

        assert!(validate_website(&None).is_ok());
        assert!(validate_website(&Some(String::from_str(&env, "https://johndoe.dev"))).is_ok());

        // 113 chars, over the website bound.
        let long_url = "https://example.com/aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
        assert_eq!(
            validate_website(&Some(String::from_str(&env, long_url))),
            Err(RegistryError::InvalidInput)
        );
    }
}
