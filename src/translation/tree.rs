/*!
 * Typed text-tree translation for the UI catalogue.
 *
 * The client UI ships a nested catalogue of display texts in the base
 * language. Translating it is a structure-preserving map over the string
 * leaves: flatten to dotted keys, translate the deduplicated leaf set in
 * one batch, rebuild the same shape with translated leaves.
 */

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

use super::batch::BatchTranslator;
use crate::models::LocaleContext;

/// A tagged tree of display texts: interior nodes are named sections,
/// leaves are translatable strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextTree {
    /// A translatable text leaf
    Leaf(String),
    /// A named section of nested texts
    Node(BTreeMap<String, TextTree>),
}

impl TextTree {
    /// Build a tree from a JSON value of nested string objects
    pub fn from_json(value: serde_json::Value) -> anyhow::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Flatten the tree into dotted-key/leaf pairs in key order
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut flat = Vec::new();
        self.flatten_into("", &mut flat);
        flat
    }

    fn flatten_into(&self, prefix: &str, flat: &mut Vec<(String, String)>) {
        match self {
            TextTree::Leaf(text) => flat.push((prefix.to_string(), text.clone())),
            TextTree::Node(children) => {
                for (key, child) in children {
                    let child_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    child.flatten_into(&child_prefix, flat);
                }
            }
        }
    }

    /// Rebuild a tree from dotted-key/leaf pairs
    pub fn from_flat(entries: &[(String, String)]) -> Self {
        let mut root = BTreeMap::new();

        for (dotted_key, text) in entries {
            let mut current = &mut root;
            let mut segments = dotted_key.split('.').peekable();

            while let Some(segment) = segments.next() {
                if segments.peek().is_none() {
                    current.insert(segment.to_string(), TextTree::Leaf(text.clone()));
                } else {
                    let entry = current
                        .entry(segment.to_string())
                        .or_insert_with(|| TextTree::Node(BTreeMap::new()));
                    current = match entry {
                        TextTree::Node(children) => children,
                        // A leaf in the middle of a path is replaced by a section
                        leaf => {
                            *leaf = TextTree::Node(BTreeMap::new());
                            match leaf {
                                TextTree::Node(children) => children,
                                TextTree::Leaf(_) => unreachable!(),
                            }
                        }
                    };
                }
            }
        }

        TextTree::Node(root)
    }

    /// Look up a leaf by dotted key
    pub fn get(&self, dotted_key: &str) -> Option<&str> {
        let mut current = self;
        for segment in dotted_key.split('.') {
            match current {
                TextTree::Node(children) => current = children.get(segment)?,
                TextTree::Leaf(_) => return None,
            }
        }
        match current {
            TextTree::Leaf(text) => Some(text),
            TextTree::Node(_) => None,
        }
    }

    /// Translate every leaf into the locale's target language, preserving
    /// structure.
    ///
    /// The base-language fast path returns a clone without a provider
    /// call. Leaves whose translation fails keep their original text.
    pub async fn translate(
        &self,
        translator: &BatchTranslator,
        locale: &LocaleContext,
    ) -> TextTree {
        if locale.is_base_target() {
            return self.clone();
        }

        let flat = self.flatten();

        // Deduplicate leaf values; repeated texts cost one request
        let mut unique_texts: Vec<String> = Vec::new();
        for (_, text) in &flat {
            if !unique_texts.iter().any(|t| t == text) {
                unique_texts.push(text.clone());
            }
        }

        let results = translator
            .translate_many(&unique_texts, &locale.target_language)
            .await;

        let translation_map: HashMap<&str, &str> = unique_texts
            .iter()
            .zip(results.iter())
            .filter(|(_, result)| result.success)
            .map(|(original, result)| (original.as_str(), result.translated_text.as_str()))
            .collect();

        let translated_flat: Vec<(String, String)> = flat
            .into_iter()
            .map(|(key, text)| {
                let translated = translation_map
                    .get(text.as_str())
                    .map(|t| t.to_string())
                    .unwrap_or(text);
                (key, translated)
            })
            .collect();

        TextTree::from_flat(&translated_flat)
    }
}

/// The base Spanish UI text catalogue
pub fn base_catalogue() -> TextTree {
    TextTree::from_json(json!({
        "header": {
            "title": "App de Fútbol",
            "subtitle": "Descubre estadísticas de jugadores y equipos"
        },
        "search": {
            "title": "Buscar Jugadores",
            "textTab": "Búsqueda por Texto",
            "imageTab": "Búsqueda por Imagen",
            "loadingText": "Buscando jugadores...",
            "loadingImage": "Analizando imagen con IA...",
            "noResults": "No se encontraron jugadores",
            "results": "Resultados"
        },
        "player": {
            "goals": "Goles",
            "assists": "Asistencias",
            "matches": "Minutos jugados",
            "position": "Posición",
            "nationality": "Nacionalidad",
            "team": "Equipo"
        },
        "common": {
            "language": "Idioma",
            "loading": "Cargando...",
            "error": "Error",
            "success": "Éxito"
        }
    }))
    .expect("base catalogue is valid")
}
