use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::schema::Resource;

//language=RegExp
static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)([^<>]*)>").unwrap());
//language=RegExp
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'<>`]+)))?"#)
        .unwrap()
});

/// prefixes a `href` or `src` value must start with to be kept
static SAFE_URL_PREFIXES: [&str; 9] = [
    "http://",
    "https://",
    "mailto:",
    "tel:",
    "data:image/",
    "#",
    "/",
    "./",
    "../",
];

/// returns the attributes allowed on a tag, or `None` if the tag itself is not allowed
fn allowed_attributes(tag: &str) -> Option<&'static [&'static str]> {
    let allowed: &'static [&'static str] = match tag {
        "a" => &["target", "href", "title"],
        "abbr" => &["title"],
        "blockquote" => &["cite"],
        "img" => &["src", "alt", "title", "width", "height"],
        "td" | "th" => &["width", "rowspan", "colspan", "align", "valign"],
        "b" | "br" | "code" | "del" | "div" | "em" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
        | "hr" | "i" | "ins" | "li" | "mark" | "ol" | "p" | "pre" | "s" | "small" | "span"
        | "strong" | "sub" | "sup" | "table" | "tbody" | "thead" | "tr" | "u" | "ul" => &[],
        _ => return None,
    };
    Some(allowed)
}

/// Neutralizes markup that could run script while leaving harmless formatting alone.
///
/// Tags on the whitelist are rebuilt with only their whitelisted attributes, every other
/// `<` and `>` is replaced with `&lt;` and `&gt;`. Quotes and ampersands in text are left
/// as they are, which keeps this function idempotent.
pub fn sanitize(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;
    for captures in TAG.captures_iter(input) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        output.push_str(&escape_text(&input[last_end..whole.start()]));
        match rebuild_tag(&captures) {
            Some(tag) => output.push_str(&tag),
            None => output.push_str(&escape_text(whole.as_str())),
        }
        last_end = whole.end();
    }
    output.push_str(&escape_text(&input[last_end..]));
    output
}

/// runs every sanitized field of `record` through [`sanitize`]
pub fn sanitize_record<R: Resource>(mut record: R) -> R {
    for field in R::schema().sanitized_fields() {
        if let Some(value) = record.text_field_mut(field.name) {
            *value = sanitize(value);
        }
    }
    record
}

fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_safe_url(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    SAFE_URL_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
}

/// returns the cleaned tag, or `None` if the tag must be escaped instead
fn rebuild_tag(captures: &Captures) -> Option<String> {
    let name = captures[2].to_ascii_lowercase();
    let allowed = allowed_attributes(&name)?;
    if !captures[1].is_empty() {
        return Some(format!("</{name}>"));
    }
    let raw_attributes = &captures[3];
    let mut tag = format!("<{name}");
    for attribute in ATTRIBUTE.captures_iter(raw_attributes) {
        let attribute_name = attribute[1].to_ascii_lowercase();
        if !allowed.contains(&attribute_name.as_str()) {
            continue;
        }
        let value = attribute
            .get(2)
            .or_else(|| attribute.get(3))
            .or_else(|| attribute.get(4))
            .map(|m| m.as_str());
        match value {
            Some(value) => {
                let is_url = attribute_name == "href" || attribute_name == "src";
                if is_url && !is_safe_url(value) {
                    continue;
                }
                tag.push_str(&format!(" {attribute_name}=\"{}\"", escape_attribute(value)));
            }
            None => tag.push_str(&format!(" {attribute_name}")),
        }
    }
    if raw_attributes.trim_end().ends_with('/') {
        tag.push_str(" /");
    }
    tag.push('>');
    Some(tag)
}
