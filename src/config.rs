use crate::types::RenderOptions;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROFILE_ID: &str = "1";
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_QR_SIZE: &str = "200x200";

/// Settings for one renderer. Unset options keep the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Base of the profile API; profiles live at `{base}/usuarios/{id}`.
    pub api_base_url: String,
    /// Used when the page URL carries no usable `?id=`.
    pub default_profile_id: String,
    pub qr_endpoint: String,
    pub qr_size: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_profile_id: DEFAULT_PROFILE_ID.to_string(),
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            qr_size: DEFAULT_QR_SIZE.to_string(),
        }
    }
}

impl RendererConfig {
    pub fn from_options(options: &RenderOptions) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: options.api_base_url.clone().unwrap_or(defaults.api_base_url),
            default_profile_id: options
                .default_profile_id
                .clone()
                .unwrap_or(defaults.default_profile_id),
            qr_endpoint: defaults.qr_endpoint,
            qr_size: options.qr_size.clone().unwrap_or(defaults.qr_size),
        }
    }
}
