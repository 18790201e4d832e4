//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and `#[serde(default)]`
//! so a partial JSON file is valid — missing fields get their compiled
//! default during deserialization. Each type implements [`Default`] with the
//! production default values.

use serde::{Deserialize, Serialize};

/// Root settings for the statement pipeline.
///
/// Constructed once at process start (compiled defaults, optionally merged
/// with a JSON file and `XTRACK_*` env overrides) and passed by reference
/// into the resolvers. There is no ambient global lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackSettings {
    /// Supported locales and the default.
    pub locale: LocaleSettings,
    /// Platform identity and canonical host.
    pub site: SiteSettings,
    /// LRS endpoint, credentials, and protocol version.
    pub lrs: LrsSettings,
}

impl TrackSettings {
    /// Startup validation.
    ///
    /// An unresolvable default locale or a bad protocol would otherwise only
    /// surface as a per-request failure deep in statement assembly; checking
    /// here turns it into a fail-fast configuration defect.
    pub fn validate(&self) -> crate::errors::Result<()> {
        if self.locale.supported.is_empty() {
            return Err(crate::errors::SettingsError::Invalid(
                "the supported locale set is empty".to_string(),
            ));
        }
        let default = self.locale.default.to_ascii_lowercase();
        let base = default.split('-').next().unwrap_or(&default).to_string();
        let resolvable = self
            .locale
            .supported
            .iter()
            .any(|tag| *tag == default || *tag == base);
        if !resolvable {
            return Err(crate::errors::SettingsError::Invalid(format!(
                "default locale {:?} is not in the supported set",
                self.locale.default
            )));
        }
        if self.site.protocol != "http" && self.site.protocol != "https" {
            return Err(crate::errors::SettingsError::Invalid(format!(
                "protocol must be http or https, got {:?}",
                self.site.protocol
            )));
        }
        if self.lrs.endpoint.is_empty() {
            return Err(crate::errors::SettingsError::Invalid(
                "the LRS endpoint is not configured".to_string(),
            ));
        }
        Ok(())
    }
}

/// Locale configuration: the supported set and the default tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    /// Locale codes the deployment supports.
    pub supported: Vec<String>,
    /// Default locale, used when no request locale resolves.
    pub default: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            supported: vec![
                "en".to_string(),
                "it".to_string(),
                "es".to_string(),
                "pt".to_string(),
                "el".to_string(),
            ],
            default: "en".to_string(),
        }
    }
}

/// Site identity: platform name reported in statement contexts and the
/// protocol/host pair used to absolutize identifiers when no request
/// context is available.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Platform identifier placed in every statement context.
    pub platform: String,
    /// Scheme for synthesized identifiers ("http" or "https").
    pub protocol: String,
    /// Canonical host for synthesized identifiers.
    pub host: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            platform: "CommonSpaces".to_string(),
            protocol: "https".to_string(),
            host: "www.commonspaces.eu".to_string(),
        }
    }
}

/// LRS transport configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LrsSettings {
    /// Base endpoint of the LRS, without the trailing `/statements`.
    pub endpoint: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// xAPI version header value.
    pub version: String,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LrsSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            username: String::new(),
            password: String::new(),
            version: "1.0.1".to_string(),
            timeout_secs: 30,
        }
    }
}
