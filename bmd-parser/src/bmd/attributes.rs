//! Attribute lists
//!
//!     Code fences, section titles and typed blocks accept a trailing `{...}` with a small
//!     attribute syntax. The recognizers turn it into a comma terminated string and hand it to
//!     [`parse_attr_list`], which repeatedly strips one of:
//!
//!         #name,          the element id. Only the first one is kept, later ones are ignored.
//!         .name,          a class. Classes accumulate, in order, into one class list.
//!         key=value,      a generic attribute. Order is kept and duplicate keys are retained.
//!
//!     Whitespace around each token is ignored. Parsing stops at the first text that matches
//!     none of the three forms; what is left is returned unparsed.
//!
//! Rendering
//!
//!     As HTML attributes the list renders as ` id="…"`, then ` class="a b"`, then the generic
//!     pairs in source order. Values are attribute-escaped.
//!
//!     [`AttrList::to_map`] flattens the list into a key/value map (id, class and generic
//!     attributes, the last duplicate winning). The class list is part of that map.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static ID_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*#([\-\w]+)[ \t]*,").unwrap());

static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*\.([\-\w]+)[ \t]*,").unwrap());

static OTHER_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*([\-\w]+)[ \t]*=[ \t]*(.*?),").unwrap());

static SLUG_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \-,]+").unwrap());

static SLUG_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"[#@&"'(§!)*$€%£`<>?,;.:\\/+={\[}\]]"##).unwrap());

/// A generic `key=value` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parsed attribute set of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttrList {
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl AttrList {
    /// Parse a comma terminated attribute string, ignoring anything left unparsed.
    pub fn parse(src: &str) -> Self {
        parse_attr_list(src).0
    }

    /// Set the id unless one is already present.
    pub fn set_default_id(&mut self, id: impl Into<String>) {
        if self.id.is_none() {
            self.id = Some(id.into());
        }
    }

    /// The space joined class list, if any class was given.
    pub fn class_value(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.join(" "))
        }
    }

    /// Value of a generic attribute. With duplicate keys the last one wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    /// Flatten into a key/value map: `id`, `class`, then generic attributes in order.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        if let Some(id) = &self.id {
            map.insert("id".to_string(), id.clone());
        }
        if let Some(class) = self.class_value() {
            map.insert("class".to_string(), class);
        }
        for attr in &self.attributes {
            map.insert(attr.key.clone(), attr.value.clone());
        }
        map
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    /// Render as HTML attributes, each preceded by a space.
    pub fn to_html_attrs(&self) -> String {
        let mut out = String::new();
        if let Some(id) = &self.id {
            push_html_attr(&mut out, "id", id);
        }
        self.push_non_id_attrs(&mut out);
        out
    }

    /// Like [`AttrList::to_html_attrs`] but without the id, for templates that derive their
    /// own ids from it.
    pub fn to_html_attrs_without_id(&self) -> String {
        let mut out = String::new();
        self.push_non_id_attrs(&mut out);
        out
    }

    fn push_non_id_attrs(&self, out: &mut String) {
        if let Some(class) = self.class_value() {
            push_html_attr(out, "class", &class);
        }
        for attr in &self.attributes {
            push_html_attr(out, &attr.key, &attr.value);
        }
    }
}

fn push_html_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}

/// Parse attributes off the front of `src`, returning the list and the unparsed remainder.
pub fn parse_attr_list(src: &str) -> (AttrList, &str) {
    let mut attrs = AttrList::default();
    let mut rest = src;

    loop {
        if let Some(caps) = ID_ATTR.captures(rest) {
            attrs.set_default_id(&caps[1]);
            rest = &rest[caps[0].len()..];
        } else if let Some(caps) = CLASS_ATTR.captures(rest) {
            attrs.classes.push(caps[1].to_string());
            rest = &rest[caps[0].len()..];
        } else if let Some(caps) = OTHER_ATTR.captures(rest) {
            attrs
                .attributes
                .push(Attribute::new(&caps[1], caps[2].trim_end()));
            rest = &rest[caps[0].len()..];
        } else {
            break;
        }
    }

    (attrs, rest)
}

/// Derive an anchor id from a title.
///
/// Runs of spaces, hyphens and commas become a single `-`, a fixed set of punctuation is
/// dropped and the result is lowercased: `"Hello, World!"` gives `"hello-world"`.
pub fn slugify(title: &str) -> String {
    let dashed = SLUG_SEPARATORS.replace_all(title, "-");
    SLUG_PUNCTUATION.replace_all(&dashed, "").to_lowercase()
}
