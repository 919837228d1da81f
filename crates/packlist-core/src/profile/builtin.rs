use crate::error::PacklistError;
use crate::profile::parse_profile_str;
use crate::profile::schema::Profile;

const DEFAULT_PROFILE_JSON: &str = include_str!("../../../../profiles/default.json");

/// Load the builtin Korean order-sheet profile.
pub fn default_profile() -> Result<Profile, PacklistError> {
    parse_profile_str(DEFAULT_PROFILE_JSON)
}
