//! Profiles API: customers, subscribers and donors.
//!
//! Unlike the other areas, profiles live directly under the version segment
//! (`/1.0/profiles`) rather than under `commerce/`.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::config::CommerceConfig;
use crate::rest::endpoint::{check_id_list, Endpoint};
use crate::rest::errors::CommerceError;
use crate::rest::params::QueryParams;
use crate::rest::resources::common::{Address, Pagination};

/// A customer profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// The unique identifier of the profile.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Whether the person has a site account.
    pub has_account: bool,
    /// Whether the person has placed an order.
    pub is_customer: bool,
    /// ISO 8601 creation time.
    pub created_on: String,
    /// Most recent address on file.
    pub address: Option<Address>,
    /// Whether the person opted in to marketing email.
    pub accepts_marketing: bool,
}

/// Response of [`retrieve_all_profiles`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetrieveAllProfilesResponse {
    /// Profiles on this page.
    pub profiles: Vec<Profile>,
    /// Cursor for the next page.
    pub pagination: Pagination,
}

/// Response of [`retrieve_specific_profiles`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetrieveSpecificProfilesResponse {
    /// The requested profiles.
    pub profiles: Vec<Profile>,
}

const RETRIEVE_ALL_PROFILES: Endpoint = Endpoint::new(
    "RetrieveAllProfiles",
    "retrieve all profiles",
    HttpMethod::Get,
    "profiles",
    200,
);
const RETRIEVE_SPECIFIC_PROFILES: Endpoint = Endpoint::new(
    "RetrieveSpecificProfiles",
    "retrieve specific profiles",
    HttpMethod::Get,
    "profiles/{profileIds}",
    200,
);

/// Lists profiles.
///
/// Forwards `cursor`, `filter`, `sortDirection` and `sortField`. The
/// modification range, `status` and `product_type` are validated but not sent.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidQuery`] if `params` fails validation, and
/// [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_all_profiles(
    config: &CommerceConfig,
    params: &QueryParams,
) -> Result<RetrieveAllProfilesResponse, CommerceError> {
    params.validate()?;
    RETRIEVE_ALL_PROFILES
        .call(config)
        .query_param("cursor", params.cursor())
        .query_param("filter", params.filter())
        .query_param("sortDirection", params.sort_direction())
        .query_param("sortField", params.sort_field())
        .fetch()
        .await
}

/// Retrieves up to 50 profiles by ID.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `profile_ids` is empty or has
/// more than 50 entries, and [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_specific_profiles<S: AsRef<str>>(
    config: &CommerceConfig,
    profile_ids: &[S],
) -> Result<RetrieveSpecificProfilesResponse, CommerceError> {
    check_id_list(
        profile_ids,
        "profileIDs cannot be empty",
        "profileIDs cannot exceed 50 IDs",
    )?;
    RETRIEVE_SPECIFIC_PROFILES
        .call(config)
        .path_list("profileIds", profile_ids)
        .fetch()
        .await
}
