use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::RendererConfig;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL of an external QR code image that encodes `page_url`.
pub fn qr_code_url(page_url: &str, config: &RendererConfig) -> String {
    format!(
        "{}?data={}&size={}",
        config.qr_endpoint,
        utf8_percent_encode(page_url, URI_COMPONENT),
        config.qr_size
    )
}
