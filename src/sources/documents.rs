//! Document shapes of the embedded collections and their flattening.
//!
//! Grouped collections (languages, tutorials, hints, ...) nest records under a
//! parent. Flattening copies the parent's id and name onto each record so a
//! record can be displayed and navigated to on its own.

use crate::content::{
    Certification, ContentItem, Hint, HowToGuide, ResourceLink, Snippet, Tutorial, Variant,
    lenient,
};
use serde::Deserialize;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

/// Parse `document` as the collection shape of `variant`.
pub(super) fn parse(variant: Variant, document: &str) -> serde_json::Result<Vec<ContentItem>> {
    Ok(match variant {
        Variant::LanguageSnippet => snippets(from_str(document)?)
            .map(ContentItem::LanguageSnippet)
            .collect(),
        Variant::Topic => snippets(from_str(document)?).map(ContentItem::Topic).collect(),
        Variant::Tutorial => tutorials(from_str(document)?),
        Variant::Tool => flat(document, ContentItem::Tool)?,
        Variant::Hint => hints(from_str(document)?),
        Variant::QuickTip => flat(document, ContentItem::QuickTip)?,
        Variant::Certification => certifications(from_str(document)?),
        Variant::Pattern => flat(document, ContentItem::Pattern)?,
        Variant::Platform => flat(document, ContentItem::Platform)?,
        Variant::HowToGuide => how_to_guides(from_str(document)?),
        Variant::ResourceLink => resource_links(from_str(document)?),
    })
}

/// Top-level records of `document`. Invalid JSON or a non-list document is an
/// error; a bad element inside the list is skipped.
fn from_str<T: DeserializeOwned>(document: &str) -> serde_json::Result<Vec<T>> {
    match serde_json::from_str(document)? {
        value @ Value::Array(_) => Ok(lenient::records_from_value(value)),
        _ => Err(serde_json::Error::custom("expected a list of records at the top level")),
    }
}

fn flat<T: DeserializeOwned>(
    document: &str,
    wrap: fn(T) -> ContentItem,
) -> serde_json::Result<Vec<ContentItem>> {
    Ok(from_str(document)?.into_iter().map(wrap).collect())
}

/// A language reference or specialized topic: named sections of snippets.
#[derive(Debug, Deserialize)]
struct SnippetBook {
    #[serde(default, deserialize_with = "lenient::text")]
    id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    name: String,
    #[serde(default, deserialize_with = "lenient::records")]
    categories: Vec<Section<Snippet>>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Section<T> {
    #[serde(default, deserialize_with = "lenient::text")]
    id: String,
    #[serde(default, deserialize_with = "lenient::text", alias = "title")]
    name: String,
    #[serde(
        default = "Vec::new",
        deserialize_with = "lenient::records",
        alias = "hints",
        alias = "certifications",
        alias = "links"
    )]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct TutorialTrack {
    #[serde(default, deserialize_with = "lenient::text")]
    id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    name: String,
    #[serde(default, deserialize_with = "lenient::records")]
    tutorials: Vec<Tutorial>,
}

fn snippets(books: Vec<SnippetBook>) -> impl Iterator<Item = Snippet> {
    let mut items = Vec::new();
    for book in books {
        for section in book.categories {
            for (item_index, snippet) in section.items.into_iter().enumerate() {
                items.push(Snippet {
                    owner_id: book.id.clone(),
                    owner_name: book.name.clone(),
                    category_id: section.id.clone(),
                    category_name: section.name.clone(),
                    item_index,
                    ..snippet
                });
            }
        }
    }
    items.into_iter()
}

fn tutorials(tracks: Vec<TutorialTrack>) -> Vec<ContentItem> {
    let mut items = Vec::new();
    for track in tracks {
        for tutorial in track.tutorials {
            items.push(ContentItem::Tutorial(Tutorial {
                language_id: track.id.clone(),
                language_name: track.name.clone(),
                ..tutorial
            }));
        }
    }
    items
}

fn hints(sections: Vec<Section<Hint>>) -> Vec<ContentItem> {
    let mut items = Vec::new();
    for section in sections {
        for (item_index, hint) in section.items.into_iter().enumerate() {
            items.push(ContentItem::Hint(Hint {
                category_id: section.id.clone(),
                category_title: section.name.clone(),
                item_index,
                ..hint
            }));
        }
    }
    items
}

fn certifications(sections: Vec<Section<Certification>>) -> Vec<ContentItem> {
    let mut items = Vec::new();
    for section in sections {
        for cert in section.items {
            items.push(ContentItem::Certification(Certification {
                category_id: section.id.clone(),
                category_name: section.name.clone(),
                ..cert
            }));
        }
    }
    items
}

fn how_to_guides(sections: Vec<Section<HowToGuide>>) -> Vec<ContentItem> {
    let mut items = Vec::new();
    for section in sections {
        for (item_index, guide) in section.items.into_iter().enumerate() {
            items.push(ContentItem::HowToGuide(HowToGuide {
                category_id: section.id.clone(),
                category_name: section.name.clone(),
                item_index,
                ..guide
            }));
        }
    }
    items
}

fn resource_links(sections: Vec<Section<ResourceLink>>) -> Vec<ContentItem> {
    let mut items = Vec::new();
    for section in sections {
        for link in section.items {
            items.push(ContentItem::ResourceLink(ResourceLink {
                category: section.name.clone(),
                ..link
            }));
        }
    }
    items
}
