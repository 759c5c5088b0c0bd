use shared::config::RevealConfig;
use web_sys::window;

/// Reveal flow settings from the page URL, e.g. `/?variant=three-stage`.
pub fn reveal_config() -> RevealConfig {
    let search = window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let config = RevealConfig::from_query(&search);
    log::debug!("Reveal config: {:?}", config);
    config
}
