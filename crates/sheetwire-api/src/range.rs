//! A1-style range strings and value IO options for the values endpoints.

/// How uploaded values should be interpreted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueInputOption {
    /// Values are stored exactly as-is
    Raw,
    /// Values are parsed as if typed by a user (numbers, dates, formulas)
    #[default]
    UserEntered,
}

impl ValueInputOption {
    /// The wire spelling of the option
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

fn needs_quoting(tab: &str) -> bool {
    tab.is_empty() || !tab.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A range string covering a whole tab (`"TabName"`, quoted when the name
/// requires it).
pub fn tab_range(tab: &str) -> String {
    if needs_quoting(tab) {
        format!("'{}'", tab.replace('\'', "''"))
    } else {
        tab.to_string()
    }
}

/// A range string anchored at one cell (`"TabName!A1"` style).
pub fn cell_range(tab: &str, label: &str) -> String {
    format!("{}!{}", tab_range(tab), label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_tab_names_pass_through() {
        assert_eq!(tab_range("expenses"), "expenses");
        assert_eq!(tab_range("tab_2"), "tab_2");
        assert_eq!(cell_range("expenses", "A1"), "expenses!A1");
    }

    #[test]
    fn test_tab_names_needing_quotes() {
        assert_eq!(tab_range("Q1 results"), "'Q1 results'");
        assert_eq!(tab_range("bob's tab"), "'bob''s tab'");
        assert_eq!(cell_range("Q1 results", "B2"), "'Q1 results'!B2");
    }

    #[test]
    fn test_value_input_option() {
        assert_eq!(ValueInputOption::Raw.as_str(), "RAW");
        assert_eq!(ValueInputOption::UserEntered.as_str(), "USER_ENTERED");
        assert_eq!(ValueInputOption::default(), ValueInputOption::UserEntered);
    }
}
