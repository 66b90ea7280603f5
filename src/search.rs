//! Command templates for the file search tool.
//!
//! User fragments are interpolated as-is inside single quotes. Nothing is
//! escaped; the command gate is the only check on the result.

/// Search types offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Keyword,
    Pattern,
    LineRange,
    Column,
    Substitute,
}

impl SearchKind {
    /// Menu order; the 1-based position is the menu number.
    pub const ALL: [SearchKind; 5] = [
        SearchKind::Keyword,
        SearchKind::Pattern,
        SearchKind::LineRange,
        SearchKind::Column,
        SearchKind::Substitute,
    ];

    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(SearchKind::Keyword),
            "2" => Some(SearchKind::Pattern),
            "3" => Some(SearchKind::LineRange),
            "4" => Some(SearchKind::Column),
            "5" => Some(SearchKind::Substitute),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchKind::Keyword => "Keyword",
            SearchKind::Pattern => "Regex Pattern",
            SearchKind::LineRange => "Line Number Range",
            SearchKind::Column => "Awk Column",
            SearchKind::Substitute => "Sed Substitution Preview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Keyword(String),
    Pattern(String),
    LineRange { start: String, end: String },
    /// Empty `separator` means awk's default whitespace splitting.
    Column { column: String, separator: String },
    Substitute { find: String, replace: String },
}

impl SearchQuery {
    /// Build the full shell command for this query against `path`.
    pub fn to_command(&self, path: &str) -> String {
        match self {
            SearchQuery::Keyword(keyword) => format!("grep -n '{keyword}' '{path}'"),
            SearchQuery::Pattern(pattern) => format!("grep -nE '{pattern}' '{path}'"),
            SearchQuery::LineRange { start, end } => format!("sed -n '{start},{end}p' '{path}'"),
            SearchQuery::Column { column, separator } if separator.is_empty() => {
                format!("awk '{{print ${column}}}' '{path}'")
            }
            SearchQuery::Column { column, separator } => {
                format!("awk -F'{separator}' '{{print ${column}}}' '{path}'")
            }
            SearchQuery::Substitute { find, replace } => {
                format!("sed 's/{find}/{replace}/g' '{path}'")
            }
        }
    }

    /// The tool the command delegates to.
    pub fn tool(&self) -> &'static str {
        match self {
            SearchQuery::Keyword(_) | SearchQuery::Pattern(_) => "grep",
            SearchQuery::Column { .. } => "awk",
            SearchQuery::LineRange { .. } | SearchQuery::Substitute { .. } => "sed",
        }
    }
}
