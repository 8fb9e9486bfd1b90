//! site-config command - Print the documentation site configuration

use anyhow::Result;

use crate::docs::SiteConfig;

/// JSON of the whole site, or of one resolved locale.
pub fn site_config_json(locale: Option<&str>, path: Option<&str>) -> Result<String> {
    let site = SiteConfig::builtin();
    site.validate()?;

    let key = match (locale, path) {
        (Some(locale), _) => Some(locale),
        (None, Some(path)) => Some(site.locale_for_path(path)),
        (None, None) => None,
    };
    let json = match key {
        Some(key) => serde_json::to_string_pretty(&site.resolved(key)?)?,
        None => serde_json::to_string_pretty(site)?,
    };
    Ok(json)
}

pub fn site_config(locale: Option<&str>, path: Option<&str>) -> Result<()> {
    println!("{}", site_config_json(locale, path)?);
    Ok(())
}
