//! Searchable text extraction.
//!
//! Each variant contributes its text fields in a fixed order: title, body,
//! tag lists, then owner/category names. The result is lowercased with
//! whitespace runs collapsed to a single space.

use crate::content::ContentItem;

/// Compute the lowercase, whitespace-normalized search blob for `item`.
pub fn searchable_text(item: &ContentItem) -> String {
    let mut fields = Fields::default();

    match item {
        ContentItem::LanguageSnippet(s) | ContentItem::Topic(s) => fields
            .text(&s.title)
            .text(&s.description)
            .text(&s.code)
            .text(&s.usage)
            .list(&s.related_topics)
            .text(&s.owner_name)
            .text(&s.category_name),
        ContentItem::Tutorial(t) => fields
            .text(&t.title)
            .text(&t.description)
            .list(&t.topics)
            .text(&t.level)
            .text(&t.language_name),
        ContentItem::Tool(t) => fields
            .text(&t.name)
            .text(&t.description)
            .list(&t.features)
            .list(&t.use_cases)
            .list(&t.platforms)
            .text(&t.category)
            .text(&t.developer),
        ContentItem::Hint(h) => fields
            .text(&h.scenario)
            .text(&h.recommendation)
            .text(&h.reason)
            .list(&h.technologies)
            .text(&h.when_to_use)
            .text(&h.category_title),
        ContentItem::QuickTip(t) => fields.text(&t.title).text(&t.answer).text(&t.category),
        ContentItem::Certification(c) => fields
            .text(&c.name)
            .text(&c.description)
            .list(&c.topics)
            .text(&c.provider)
            .text(&c.level)
            .text(&c.category_name),
        ContentItem::Pattern(p) => fields
            .text(&p.name)
            .text(&p.description)
            .text(&p.category),
        ContentItem::Platform(p) => fields
            .text(&p.name)
            .text(&p.description)
            .list(&p.features)
            .text(&p.category),
        ContentItem::HowToGuide(g) => fields
            .text(&g.title)
            .text(&g.description)
            .text(&g.usage)
            .list(&g.technologies)
            .text(&g.category_name),
        ContentItem::ResourceLink(l) => fields
            .text(&l.name)
            .text(&l.description)
            .text(&l.category),
    };

    fields.finish()
}

/// Collapse every whitespace run in `text` to one space and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Default)]
struct Fields<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    fn text(&mut self, value: &'a str) -> &mut Self {
        self.parts.push(value);
        self
    }

    fn list(&mut self, values: &'a [String]) -> &mut Self {
        self.parts.extend(values.iter().map(String::as_str));
        self
    }

    fn finish(self) -> String {
        collapse_whitespace(&self.parts.join(" ").to_lowercase())
    }
}
