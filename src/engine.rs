use url::Url;

use crate::config::RendererConfig;
use crate::dom::{Element, Node, Page, Slot};
use crate::error::Result;
use crate::fetch::{HttpProfileSource, ProfileSource};
use crate::qr::qr_code_url;
use crate::style::synthesize;
use crate::types::{LinkEntry, Profile, RenderedPage};

/// Fetches a profile and paints it onto a page.
pub struct ProfileRenderer<S> {
    source: S,
    config: RendererConfig,
}

impl ProfileRenderer<HttpProfileSource> {
    /// Renderer backed by the profile HTTP API named in `config`.
    pub fn http(config: RendererConfig) -> Result<Self> {
        let source = HttpProfileSource::new(&config.api_base_url)?;
        Ok(Self::new(source, config))
    }
}

impl<S: ProfileSource> ProfileRenderer<S> {
    pub fn new(source: S, config: RendererConfig) -> Self {
        Self { source, config }
    }

    /// Resolve the id from `page_url`, fetch, then populate `page`.
    ///
    /// The page is not touched until the fetch has succeeded; a failed
    /// fetch leaves it exactly as it was.
    pub async fn render(&self, page: &mut Page, page_url: &str) -> Result<RenderedPage> {
        let id = resolve_profile_id(page_url, &self.config.default_profile_id);
        let profile = match self.source.fetch_profile(&id).await {
            Ok(profile) => profile,
            Err(err) => {
                log::error!("failed to fetch profile {id}: {err}");
                return Err(err);
            }
        };
        Ok(populate(page, &profile, page_url, &self.config))
    }
}

/// The `id` query parameter of `page_url`, or `default` when it is absent,
/// empty, or the URL does not parse.
pub fn resolve_profile_id(page_url: &str, default: &str) -> String {
    let id = Url::parse(page_url).ok().and_then(|url| {
        url.query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    });

    match id {
        Some(id) => {
            log::debug!("profile id {id} from {page_url}");
            id
        }
        None => {
            log::warn!("no profile id in {page_url:?}, using {default}");
            default.to_string()
        }
    }
}

/// Write an already fetched profile onto `page`.
///
/// Each slot is written only if the page has it. The style sink is
/// acquired (or created) and its content replaced with fresh CSS.
pub fn populate(
    page: &mut Page,
    profile: &Profile,
    page_url: &str,
    config: &RendererConfig,
) -> RenderedPage {
    page.set_title(&profile.name);

    if let Some(name) = page.slot_mut(Slot::Name) {
        name.set_text(&profile.name);
    }

    if let (Some(photo), Some(photo_url)) = (page.slot_mut(Slot::Photo), &profile.photo_url) {
        photo.set_attr("src", photo_url);
        photo.set_attr("alt", &profile.name);
    }

    if let Some(list) = page.slot_mut(Slot::Links) {
        list.replace_children(profile.links.iter().map(render_link).collect());
    }

    let qr_url = qr_code_url(page_url, config);
    if let Some(qr) = page.slot_mut(Slot::QrCode) {
        qr.set_attr("src", &qr_url);
        qr.set_attr("alt", "QR code");
    }

    let stylesheet = synthesize(profile);
    page.style_sink().replace(stylesheet.clone());

    RenderedPage {
        profile_id: profile.id.clone(),
        html: page.to_html(),
        stylesheet,
        qr_code_url: qr_url,
    }
}

fn render_link(link: &LinkEntry) -> Node {
    let mut anchor = Element::new("a")
        .with_attr("class", "link")
        .with_attr("href", &link.url)
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener noreferrer");

    if let Some(icon) = &link.icon {
        anchor = anchor.with_child(
            Element::new("img")
                .with_attr("class", "link-icon")
                .with_attr("src", icon)
                .with_attr("alt", ""),
        );
    }

    let anchor = anchor.with_child(Element::new("span").with_text(&link.text));
    Element::new("li").with_child(anchor).into()
}
