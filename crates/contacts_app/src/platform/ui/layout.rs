use contacts_core::ContactListView;

use super::constants::*;
use super::render::{escape, sidebar};

/// Full document: sidebar from the contact list view, `detail` as the outlet.
pub fn page(view: &ContactListView, detail: &str) -> String {
    let detail_class = if view.detail_loading {
        LOADING_CLASS
    } else {
        ""
    };
    document(
        APP_TITLE,
        &format!(
            "<div id=\"{SIDEBAR}\">{sidebar}</div>\n<div id=\"{DETAIL}\" class=\"{detail_class}\">{detail}</div>",
            sidebar = sidebar(view),
        ),
    )
}

pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}
