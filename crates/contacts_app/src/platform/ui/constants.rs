pub const APP_TITLE: &str = "Contacts";

pub const SIDEBAR: &str = "sidebar";
pub const DETAIL: &str = "detail";
pub const SEARCH_FORM: &str = "search-form";
pub const SEARCH_INPUT: &str = "q";
pub const SEARCH_SPINNER: &str = "search-spinner";
pub const CONTACT_PANE: &str = "contact";
pub const EDIT_FORM: &str = "contact-form";
pub const INDEX_PANE: &str = "index-page";
pub const ERROR_PANE: &str = "error-page";

pub const LOADING_CLASS: &str = "loading";
