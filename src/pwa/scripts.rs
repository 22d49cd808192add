use anyhow::Context;
use rust_embed::RustEmbed;

use super::WorkerVariant;

#[derive(RustEmbed)]
#[folder = "static/sw/"]
struct SwAssets;

/// The three service-worker script bodies, loaded once at startup.
///
/// A missing or malformed asset fails `load()` and the server refuses to
/// start; there is no per-request file access.
pub struct ScriptTemplates {
    full: String,
    noop: String,
    escape_hatch: String,
}

impl ScriptTemplates {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            full: read_asset("service-worker.js")?,
            noop: read_asset("service-worker-noop.js")?,
            escape_hatch: read_asset("service-worker-escape-hatch.js")?,
        })
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    pub fn noop(&self) -> &str {
        &self.noop
    }

    pub fn escape_hatch(&self) -> &str {
        &self.escape_hatch
    }

    pub fn script_for(&self, variant: WorkerVariant) -> &str {
        match variant {
            WorkerVariant::EscapeHatch => self.escape_hatch(),
            WorkerVariant::Noop => self.noop(),
            WorkerVariant::Full => self.full(),
        }
    }
}

fn read_asset(name: &str) -> anyhow::Result<String> {
    let file = SwAssets::get(name)
        .with_context(|| format!("missing service worker asset: static/sw/{name}"))?;

    String::from_utf8(file.data.into_owned())
        .with_context(|| format!("service worker asset is not valid UTF-8: static/sw/{name}"))
}
