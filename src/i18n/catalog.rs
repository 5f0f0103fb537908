use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::debug;

use super::number::format_number;
use super::plural::PluralCategory;
use super::{I18nError, Locale};

/// A template, or one template per plural category.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Entry {
    Text(String),
    Plural(BTreeMap<PluralCategory, String>),
}

#[derive(Debug, Clone)]
enum Value {
    Text(String),
    Number(f64),
}

/// Interpolation arguments for [`Catalog::translate`].
#[derive(Debug, Clone, Default)]
pub struct Args {
    values: Vec<(String, Value)>,
    count: Option<u64>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.push((name.to_string(), Value::Text(value.into())));
        self
    }

    pub fn number(mut self, name: &str, value: f64) -> Self {
        self.values.push((name.to_string(), Value::Number(value)));
        self
    }

    /// Selects the plural form and is also available as `{{count}}`.
    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self.number("count", count as f64)
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Locale, HashMap<String, Entry>>,
}

impl Catalog {
    /// The Arabic and English tables shipped with the binary.
    pub fn builtin() -> Result<Self, I18nError> {
        let mut catalog = Self::default();
        catalog.add_locale_json(Locale::Ar, include_str!("../../locales/ar.json"))?;
        catalog.add_locale_json(Locale::En, include_str!("../../locales/en.json"))?;
        Ok(catalog)
    }

    /// Merges a JSON object of `key -> template | {category -> template}`.
    pub fn add_locale_json(&mut self, locale: Locale, json: &str) -> Result<(), I18nError> {
        let entries: HashMap<String, Entry> = serde_json::from_str(json)
            .map_err(|source| I18nError::InvalidCatalog { locale, source })?;
        debug!(locale = %locale, keys = entries.len(), "Loaded catalog");
        self.tables.entry(locale).or_default().extend(entries);
        Ok(())
    }

    /// Looks the key up in `locale`, then in the fallback locale. An unknown key
    /// renders as itself.
    pub fn translate(&self, locale: Locale, key: &str, args: &Args) -> String {
        let Some((found_in, entry)) = self.lookup(locale, key) else {
            debug!(locale = %locale, key, "Missing translation");
            return key.to_string();
        };

        let template = match entry {
            Entry::Text(text) => text.as_str(),
            Entry::Plural(forms) => {
                let category = args
                    .count
                    .map(|count| PluralCategory::for_count(found_in, count))
                    .unwrap_or(PluralCategory::Other);
                forms
                    .get(&category)
                    .or_else(|| forms.get(&PluralCategory::Other))
                    .or_else(|| forms.values().next())
                    .map(String::as_str)
                    .unwrap_or(key)
            }
        };

        interpolate(template, args, locale)
    }

    /// Shorthand for a template without arguments.
    pub fn t(&self, locale: Locale, key: &str) -> String {
        self.translate(locale, key, &Args::new())
    }

    /// An amount rendered with the locale's `currency_format` template.
    pub fn currency(&self, locale: Locale, amount: f64) -> String {
        self.translate(locale, "currency_format", &Args::new().number("val", amount))
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<(Locale, &Entry)> {
        [locale, Locale::FALLBACK].into_iter().find_map(|candidate| {
            self.tables
                .get(&candidate)
                .and_then(|table| table.get(key))
                .map(|entry| (candidate, entry))
        })
    }
}

/// Replaces `{{name}}` and `{{name, number}}` placeholders. Unknown names are
/// left in place.
fn interpolate(template: &str, args: &Args, locale: Locale) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let inner = &after[..end];
        let (name, format) = match inner.split_once(',') {
            Some((name, format)) => (name.trim(), Some(format.trim())),
            None => (inner.trim(), None),
        };

        match (args.get(name), format) {
            (Some(Value::Number(n)), Some("number")) => out.push_str(&format_number(*n, locale)),
            (Some(Value::Number(n)), _) => out.push_str(&plain_number(*n)),
            (Some(Value::Text(text)), _) => out.push_str(text),
            (None, _) => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn plain_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
