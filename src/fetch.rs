use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::{FetchError, Result};
use crate::types::Profile;

/// Characters escaped when an id is placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where profiles come from.
#[allow(async_fn_in_trait)]
pub trait ProfileSource {
    async fn fetch_profile(&self, id: &str) -> Result<Profile>;
}

/// Profiles served as JSON at `{base}/usuarios/{id}`.
pub struct HttpProfileSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProfileSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn profile_url(&self, id: &str) -> String {
        format!("{}/usuarios/{}", self.base_url, utf8_percent_encode(id, PATH_SEGMENT))
    }
}

impl ProfileSource for HttpProfileSource {
    async fn fetch_profile(&self, id: &str) -> Result<Profile> {
        let url = self.profile_url(id);
        log::debug!("fetching profile from {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let profile: Profile = serde_json::from_str(&body)?;
        log::debug!("received profile {} with {} links", profile.id, profile.links.len());
        Ok(profile)
    }
}
