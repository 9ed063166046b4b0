use serde::Deserialize;
use thiserror::Error;

/// A user profile as returned by `GET /users/{login}`.
///
/// JSON keys are snake_case; `login` is exposed as `handle`. Keys that are
/// already camelCase (`avatarUrl`) are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(rename = "login")]
    pub handle: String,
    #[serde(alias = "avatarUrl")]
    pub avatar_url: String,
    pub bio: String,
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("malformed profile payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile has an empty login")]
    EmptyHandle,
}

impl Profile {
    /// Decodes a response body. Unknown keys are ignored; all three fields are required.
    pub fn from_slice(body: &[u8]) -> Result<Self, ProfileError> {
        let profile: Profile = serde_json::from_slice(body)?;
        if profile.handle.is_empty() {
            return Err(ProfileError::EmptyHandle);
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_octocat() {
        let body = br#"{"login":"octocat","avatar_url":"http://x/a.png","bio":"hi"}"#;
        let profile = Profile::from_slice(body).unwrap();
        assert_eq!(
            profile,
            Profile {
                handle: "octocat".into(),
                avatar_url: "http://x/a.png".into(),
                bio: "hi".into(),
            }
        );
    }

    #[test]
    fn test_decode_ignores_extra_keys() {
        let body = br#"{"login":"octocat","id":583231,"avatar_url":"","bio":"","public_repos":8}"#;
        let profile = Profile::from_slice(body).unwrap();
        assert_eq!(profile.handle, "octocat");
        assert!(profile.avatar_url.is_empty());
        assert!(profile.bio.is_empty());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = br#"{"login":"octocat","avatar_url":"http://x/a.png"}"#;
        assert!(matches!(Profile::from_slice(body), Err(ProfileError::Json(_))));
    }

    #[test]
    fn test_null_bio_is_a_type_mismatch() {
        let body = br#"{"login":"octocat","avatar_url":"http://x/a.png","bio":null}"#;
        assert!(matches!(Profile::from_slice(body), Err(ProfileError::Json(_))));
    }

    #[test]
    fn test_camel_case_avatar_key_is_accepted() {
        let body = br#"{"login":"octocat","avatarUrl":"http://x/a.png","bio":"hi"}"#;
        let profile = Profile::from_slice(body).unwrap();
        assert_eq!(profile.avatar_url, "http://x/a.png");
    }

    #[test]
    fn test_empty_login_is_rejected() {
        let body = br#"{"login":"","avatar_url":"http://x/a.png","bio":"hi"}"#;
        assert!(matches!(
            Profile::from_slice(body),
            Err(ProfileError::EmptyHandle)
        ));
    }
}
