use std::fmt::Write;

use axum::http::StatusCode;
use contacts_core::{
    ContactLabel, ContactListBody, ContactListView, FAVORITE_MARKER, NO_CONTACTS, NO_NAME,
};
use contacts_engine::ContactRecord;

use super::constants::*;
use super::layout::document;
use crate::platform::effects::to_contact;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Searches without reloading the page. Every keystroke fetches the current
/// path with the new `q` and swaps the contact list in; only the response to the
/// most recent request is applied. Without scripting the form submits normally.
const SEARCH_SCRIPT: &str = r##"<script>
(function () {
  var form = document.getElementById("search-form");
  var input = document.getElementById("q");
  var spinner = document.getElementById("search-spinner");
  var latest = 0;
  form.addEventListener("submit", function (event) { event.preventDefault(); });
  form.addEventListener("input", function () {
    var seq = ++latest;
    var href = location.pathname + "?" + new URLSearchParams(new FormData(form)).toString();
    input.className = "loading";
    spinner.hidden = false;
    fetch(href)
      .then(function (response) { return response.text(); })
      .then(function (html) {
        if (seq !== latest) { return; }
        var next = new DOMParser().parseFromString(html, "text/html");
        var nav = next.querySelector("#sidebar nav");
        if (nav) { document.querySelector("#sidebar nav").replaceWith(nav); }
        history.replaceState(null, "", href);
        input.className = "";
        spinner.hidden = true;
      })
      .catch(function () {
        if (seq === latest) { location.assign(href); }
      });
  });
})();
</script>"##;

pub fn sidebar(view: &ContactListView) -> String {
    let input_class = if view.searching { LOADING_CLASS } else { "" };
    let spinner_hidden = if view.searching { "" } else { " hidden" };
    // After a full reload keep typing where the user left off.
    let focus = if view.search_value.is_empty() {
        ""
    } else {
        " autofocus onfocus=\"this.setSelectionRange(this.value.length, this.value.length)\""
    };

    let mut html = String::new();
    let _ = write!(
        html,
        "<h1>{APP_TITLE}</h1>\n<div>\n\
         <form id=\"{SEARCH_FORM}\" role=\"search\">\n\
         <input id=\"{SEARCH_INPUT}\" class=\"{input_class}\" aria-label=\"Search contacts\" \
         placeholder=\"Search\" type=\"search\" name=\"q\" value=\"{value}\"{focus} />\n\
         <div id=\"{SEARCH_SPINNER}\" aria-hidden=\"true\"{spinner_hidden}></div>\n\
         </form>\n\
         <form method=\"post\" action=\"/\"><button type=\"submit\">New</button></form>\n\
         </div>\n<nav>\n",
        value = escape(&view.search_value),
    );
    html.push_str(&contact_list(&view.body));
    html.push_str("</nav>\n");
    html.push_str(SEARCH_SCRIPT);
    html
}

fn contact_list(body: &ContactListBody) -> String {
    let rows = match body {
        ContactListBody::Empty => return format!("<p><i>{NO_CONTACTS}</i></p>\n"),
        ContactListBody::Entries(rows) => rows,
    };

    let mut html = String::from("<ul>\n");
    for row in rows {
        let label = match &row.label {
            ContactLabel::Named(name) => escape(name),
            ContactLabel::NoName => format!("<i>{NO_NAME}</i>"),
        };
        let favorite = if row.favorite {
            format!(" <span>{FAVORITE_MARKER}</span>")
        } else {
            String::new()
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{href}\" class=\"{class}\">{label}{favorite}</a></li>",
            href = escape(&row.href),
            class = row.link_state.css_class(),
        );
    }
    html.push_str("</ul>\n");
    html
}

pub fn index_pane() -> String {
    format!(
        "<p id=\"{INDEX_PANE}\">Select a contact from the list, or press \
         <b>New</b> to create one.</p>"
    )
}

pub fn contact_pane(contact: &ContactRecord) -> String {
    let id = escape(&contact.id);
    let mut html = format!("<div id=\"{CONTACT_PANE}\">\n");

    if !contact.avatar.is_empty() {
        let _ = writeln!(
            html,
            "<div><img alt=\"\" src=\"{}\" /></div>",
            escape(&contact.avatar)
        );
    }

    let name = match to_contact(contact.clone()).display_name() {
        Some(name) => escape(&name),
        None => format!("<i>{NO_NAME}</i>"),
    };
    let (next_value, star, label) = if contact.favorite {
        ("false", FAVORITE_MARKER, "Remove from favorites")
    } else {
        ("true", "☆", "Add to favorites")
    };
    let _ = writeln!(
        html,
        "<h1>{name} <form method=\"post\" action=\"/contacts/{id}/favorite\">\
         <button aria-label=\"{label}\" name=\"favorite\" value=\"{next_value}\">{star}</button>\
         </form></h1>"
    );

    if !contact.twitter.is_empty() {
        let handle = escape(&contact.twitter);
        let _ = writeln!(
            html,
            "<p><a href=\"https://twitter.com/{handle}\">{handle}</a></p>"
        );
    }
    if !contact.notes.is_empty() {
        let _ = writeln!(html, "<p>{}</p>", escape(&contact.notes));
    }

    let _ = write!(
        html,
        "<div>\n\
         <form action=\"/contacts/{id}/edit\"><button type=\"submit\">Edit</button></form>\n\
         <form method=\"post\" action=\"/contacts/{id}/destroy\" \
         onsubmit=\"return confirm('Please confirm you want to delete this record.');\">\
         <button type=\"submit\">Delete</button></form>\n\
         </div>\n</div>"
    );
    html
}

pub fn edit_pane(contact: &ContactRecord) -> String {
    format!(
        "<form id=\"{EDIT_FORM}\" method=\"post\" action=\"/contacts/{id}/edit\">\n\
         <p><span>Name</span>\
         <input aria-label=\"First name\" name=\"first\" placeholder=\"First\" type=\"text\" value=\"{first}\" />\
         <input aria-label=\"Last name\" name=\"last\" placeholder=\"Last\" type=\"text\" value=\"{last}\" /></p>\n\
         <label><span>Twitter</span>\
         <input name=\"twitter\" placeholder=\"@handle\" type=\"text\" value=\"{twitter}\" /></label>\n\
         <label><span>Avatar URL</span>\
         <input aria-label=\"Avatar URL\" name=\"avatar\" placeholder=\"https://example.com/avatar.jpg\" type=\"text\" value=\"{avatar}\" /></label>\n\
         <label><span>Notes</span><textarea name=\"notes\" rows=\"6\">{notes}</textarea></label>\n\
         <p><button type=\"submit\">Save</button>\
         <button type=\"button\" onclick=\"history.back()\">Cancel</button></p>\n\
         </form>",
        id = escape(&contact.id),
        first = escape(&contact.first),
        last = escape(&contact.last),
        twitter = escape(&contact.twitter),
        avatar = escape(&contact.avatar),
        notes = escape(&contact.notes),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    document(
        APP_TITLE,
        &format!(
            "<div id=\"{ERROR_PANE}\">\n<h1>{code} {reason}</h1>\n<p>{message}</p>\n</div>",
            code = status.as_u16(),
            reason = status.canonical_reason().unwrap_or("Error"),
            message = escape(message),
        ),
    )
}
