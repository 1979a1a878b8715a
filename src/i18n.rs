/// Languages the finder UI can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    It,
    En,
}

/// What the page must show once a language is active: the document title
/// and the trimmed text of the recent-searches label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleExpectation {
    pub title: &'static str,
    pub recent_searches_label: &'static str,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::It => "it",
            Lang::En => "en",
        }
    }

    /// Visible text of the toggle control that activates this language.
    pub fn control_label(self) -> &'static str {
        match self {
            Lang::It => "IT",
            Lang::En => "EN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "it" | "it-it" => Some(Lang::It),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn expected(self) -> LocaleExpectation {
        match self {
            Lang::It => LocaleExpectation {
                title: "Ricerca Distributori Benzina",
                recent_searches_label: "Ricerche Recenti:",
            },
            Lang::En => LocaleExpectation {
                title: "Gas Station Finder",
                recent_searches_label: "Recent Searches:",
            },
        }
    }
}
