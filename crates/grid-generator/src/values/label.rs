//! Sequential label rendering.
//!
//! Supports placeholders in caller templates:
//! - `{name}` - dimension name
//! - `{index}` - value index

use std::borrow::Cow;

/// Render the label for `index` on the dimension `name`.
///
/// Without a template this is `<name>_<index>`.
pub fn format_label(name: &str, template: Option<&str>, index: u64) -> String {
    match template {
        Some(template) => {
            let result = replace_placeholder(template, "{name}", name);
            replace_placeholder(&result, "{index}", &index.to_string()).into_owned()
        }
        None => format!("{name}_{index}"),
    }
}

fn replace_placeholder<'a>(text: &'a str, placeholder: &str, value: &str) -> Cow<'a, str> {
    if text.contains(placeholder) {
        Cow::Owned(text.replace(placeholder, value))
    } else {
        Cow::Borrowed(text)
    }
}
