//! String lookup for the profile page.

use std::collections::HashMap;

use crate::error::CatalogError;

pub const NAMESPACE: &str = "user_profile";
pub const DEFAULT_LANGUAGE: &str = "en";

const BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("pt-BR", include_str!("../locales/pt-BR.json")),
];

pub trait Translator: Send + Sync {
    /// Active language tag, e.g. `pt-BR`.
    fn language(&self) -> &str;

    /// Looks up `key` and substitutes `{{name}}` placeholders from `params`.
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// Translation table for one namespace, with the English table as fallback.
#[derive(Debug, Clone)]
pub struct Catalog {
    language: String,
    entries: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Catalog {
    /// Parses `json` (an object of namespaces) and keeps the entries of `namespace`.
    pub fn from_json(language: &str, json: &str, namespace: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            language: language.to_string(),
            entries: parse_namespace(json, namespace)?,
            fallback: HashMap::new(),
        })
    }

    /// Catalog for `language` from the bundles compiled into the binary.
    pub fn builtin(language: &str) -> Self {
        let fallback = bundled(DEFAULT_LANGUAGE).unwrap_or_default();
        let entries = match resolve_bundle(language) {
            Some(tag) if tag != DEFAULT_LANGUAGE => bundled(tag).unwrap_or_default(),
            _ => fallback.clone(),
        };

        Self {
            language: language.to_string(),
            entries,
            fallback,
        }
    }

    pub fn with_fallback(mut self, fallback: &Catalog) -> Self {
        self.fallback = fallback.entries.clone();
        self
    }
}

impl Translator for Catalog {
    fn language(&self) -> &str {
        &self.language
    }

    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.entries.get(key).or_else(|| self.fallback.get(key)) {
            Some(template) => interpolate(template, params),
            None => {
                log::debug!("missing translation for {}.{}", NAMESPACE, key);
                key.to_string()
            }
        }
    }
}

/// Picks the bundle for a language tag: exact match first, then the first
/// bundle sharing the primary subtag.
fn resolve_bundle(language: &str) -> Option<&'static str> {
    if let Some((tag, _)) = BUNDLES.iter().find(|(tag, _)| tag.eq_ignore_ascii_case(language)) {
        return Some(*tag);
    }
    let primary = language.split(['-', '_']).next()?;
    BUNDLES
        .iter()
        .find(|(tag, _)| {
            tag.split('-')
                .next()
                .is_some_and(|p| p.eq_ignore_ascii_case(primary))
        })
        .map(|(tag, _)| *tag)
}

fn bundled(tag: &str) -> Option<HashMap<String, String>> {
    let (_, json) = BUNDLES.iter().find(|(t, _)| *t == tag)?;
    match parse_namespace(json, NAMESPACE) {
        Ok(entries) => Some(entries),
        Err(e) => {
            log::error!("bundled translations for {} are broken: {}", tag, e);
            None
        }
    }
}

fn parse_namespace(json: &str, namespace: &str) -> Result<HashMap<String, String>, CatalogError> {
    let mut root: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
    root.remove(namespace)
        .ok_or_else(|| CatalogError::MissingNamespace(namespace.to_string()))
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after[..end].trim();
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
