#[macro_use]
extern crate napi_derive;

pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod math;
pub mod parser;
pub mod qr;
pub mod style;
pub mod types;

use config::RendererConfig;
use dom::Page;
use engine::ProfileRenderer;
use types::{Profile, RenderOptions, RenderedPage};

#[napi]
pub fn health_check() -> String {
    "linkhub-native ok".to_string()
}

/// Install the env_logger backend. Safe to call more than once.
#[napi]
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // A second init only fails because a logger is already set.
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[napi(js_name = "isLight")]
pub fn is_light_color(hex: String) -> bool {
    math::luminance::is_light(&hex)
}

#[napi]
pub fn is_background_light(background: String) -> bool {
    parser::background::is_background_light(&background)
}

#[napi]
pub fn synthesize_style(profile: Profile) -> String {
    style::synthesize(&profile)
}

#[napi]
pub fn qr_code_url(page_url: String) -> String {
    qr::qr_code_url(&page_url, &RendererConfig::default())
}

/// Render an already fetched profile onto the standard page layout.
#[napi]
pub fn render_page(profile: Profile, options: RenderOptions) -> RenderedPage {
    let config = RendererConfig::from_options(&options);
    let mut page = Page::standard();
    engine::populate(&mut page, &profile, &options.page_url, &config)
}

/// Fetch the profile named by `options.pageUrl` and render it.
#[napi]
pub async fn render_profile(options: RenderOptions) -> napi::Result<RenderedPage> {
    let config = RendererConfig::from_options(&options);
    let renderer = ProfileRenderer::http(config)?;
    let mut page = Page::standard();
    Ok(renderer.render(&mut page, &options.page_url).await?)
}
