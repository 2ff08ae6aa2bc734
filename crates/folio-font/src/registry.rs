//! Per-document font selection and registration
//!
//! The registry holds the document's current font and the set of fonts the
//! document has emitted so far. Each emitted font gets a content-stream
//! resource name (`F1`, `F2`, ...) the first time it is registered; later
//! uses, on any page, reuse that name.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::identity::{FontIdentity, StandardFont, Style};
use crate::metrics::Metrics;
use crate::provider::MetricsProvider;
use crate::{FontError, Result};

/// Content-stream resource name of a registered font
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(Arc<str>);

impl ResourceName {
    fn numbered(n: usize) -> Self {
        ResourceName(Arc::from(format!("F{n}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved font together with its metrics
#[derive(Debug, Clone)]
pub struct FontHandle {
    identity: FontIdentity,
    metrics: Arc<Metrics>,
}

impl FontHandle {
    pub fn identity(&self) -> &FontIdentity {
        &self.identity
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }
}

impl PartialEq for FontHandle {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

/// Font state of one document
#[derive(Debug)]
pub struct FontRegistry {
    provider: Arc<MetricsProvider>,
    current: FontHandle,
    current_family: String,
    current_style: Style,
    names: HashMap<FontIdentity, ResourceName>,
    /// Registered identities in first-registration order
    order: Vec<FontIdentity>,
    /// External font names already located, so repeat selections skip the loader
    located: Mutex<HashMap<String, FontIdentity>>,
}

impl FontRegistry {
    /// Create a registry whose current font is `family` in `style`
    pub fn new(provider: Arc<MetricsProvider>, family: &str, style: Style) -> Result<Self> {
        let located = Mutex::new(HashMap::new());
        let identity = resolve_identity(&provider, &located, family, style)?;
        let metrics = provider.metrics(&identity)?;

        Ok(Self {
            provider,
            current: FontHandle { identity, metrics },
            current_family: family.to_string(),
            current_style: style,
            names: HashMap::new(),
            order: Vec::new(),
            located,
        })
    }

    pub fn provider(&self) -> &Arc<MetricsProvider> {
        &self.provider
    }

    /// Resolve a family, face name or font path without touching the
    /// current font.
    ///
    /// `style` is ignored for face names and external files.
    pub fn select(&self, name: &str, style: Style) -> Result<FontHandle> {
        let identity = resolve_identity(&self.provider, &self.located, name, style)?;
        let metrics = self.provider.metrics(&identity)?;
        Ok(FontHandle { identity, metrics })
    }

    /// Make `name` in `style` the current font.
    ///
    /// On failure the current font is left as it was.
    pub fn set_font(&mut self, name: &str, style: Style) -> Result<&FontHandle> {
        let handle = self.select(name, style)?;
        tracing::debug!("Current font: {}", handle.identity);

        self.current = handle;
        self.current_family = name.to_string();
        self.current_style = style;
        Ok(&self.current)
    }

    pub fn current(&self) -> &FontHandle {
        &self.current
    }

    /// The family or path the current font was selected by
    pub fn current_family(&self) -> &str {
        &self.current_family
    }

    pub fn current_style(&self) -> Style {
        self.current_style
    }

    /// Register `identity` with the document, returning its resource name.
    ///
    /// The first registration assigns the next free name; repeats return it.
    pub fn register(&mut self, identity: &FontIdentity) -> ResourceName {
        if let Some(name) = self.names.get(identity) {
            return name.clone();
        }

        let name = ResourceName::numbered(self.order.len() + 1);
        tracing::debug!("Registered {} as /{}", identity, name);
        self.names.insert(identity.clone(), name.clone());
        self.order.push(identity.clone());
        name
    }

    pub fn resource_name(&self, identity: &FontIdentity) -> Option<&ResourceName> {
        self.names.get(identity)
    }

    pub fn is_registered(&self, identity: &FontIdentity) -> bool {
        self.names.contains_key(identity)
    }

    /// Registered fonts in registration order
    pub fn registered(&self) -> impl Iterator<Item = (&FontIdentity, &ResourceName)> {
        self.order
            .iter()
            .filter_map(|id| self.names.get(id).map(|name| (id, name)))
    }

    pub fn registered_count(&self) -> usize {
        self.order.len()
    }
}

fn resolve_identity(
    provider: &MetricsProvider,
    located: &Mutex<HashMap<String, FontIdentity>>,
    name: &str,
    style: Style,
) -> Result<FontIdentity> {
    if let Some(face) = StandardFont::resolve(name, style) {
        return Ok(FontIdentity::Builtin(face));
    }

    let mut located = located.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(identity) = located.get(name) {
        return Ok(identity.clone());
    }

    let path = provider
        .loader()
        .locate(name)
        .ok_or_else(|| FontError::UnknownFont(name.to_string()))?;
    if style != Style::Normal {
        tracing::debug!("Style {:?} ignored for external font {}", style, name);
    }

    let identity = FontIdentity::external(path);
    located.insert(name.to_string(), identity.clone());
    Ok(identity)
}
