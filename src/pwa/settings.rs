use serde::Deserialize;

/// Active PWA settings.
///
/// This is also the shape of a reconfiguration request: every field carries a
/// default, so a partial document (a `[pwa]` config section, a host-supplied
/// JSON object) deserializes into a complete snapshot. Unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PwaSettings {
    /// Gates the manifest endpoint and the full worker script.
    pub enabled: bool,
    /// Forces the no-op worker script, regardless of `enabled`.
    pub noop: bool,
    /// Forces the escape-hatch worker script, winning over `noop` and
    /// `enabled`.
    pub escape_hatch: bool,
    /// Value for the `Service-Worker-Allowed` response header. When unset the
    /// header is omitted and clients fall back to the script's own directory
    /// scope.
    pub scope: Option<String>,
    /// Web app manifest, served verbatim when `enabled` is true.
    pub manifest: Option<serde_json::Value>,
}
