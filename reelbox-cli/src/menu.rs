//! Numbered menus: the main command menu and the user picker.

/// One entry of the main menu, numbered 0–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Exit,
    List,
    Add,
    Delete,
    Update,
    Stats,
    Random,
    Search,
    SortedByRating,
    GenerateSite,
    SwitchUser,
}

impl MenuChoice {
    pub(crate) const ALL: [MenuChoice; 11] = [
        Self::Exit,
        Self::List,
        Self::Add,
        Self::Delete,
        Self::Update,
        Self::Stats,
        Self::Random,
        Self::Search,
        Self::SortedByRating,
        Self::GenerateSite,
        Self::SwitchUser,
    ];

    /// Parse typed input; anything but a listed number is `None`.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ALL.get(n).copied()
    }

    pub(crate) fn label(self, manual_add: bool) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::List => "List movies",
            Self::Add if manual_add => "Add movie",
            Self::Add => "Add movie (OMDb)",
            Self::Delete => "Delete movie",
            Self::Update => "Update movie rating",
            Self::Stats => "Stats",
            Self::Random => "Random movie",
            Self::Search => "Search movie",
            Self::SortedByRating => "Movies sorted by rating",
            Self::GenerateSite => "Generate website",
            Self::SwitchUser => "Switch user",
        }
    }

    pub(crate) fn max() -> usize {
        Self::ALL.len() - 1
    }
}

/// What the user picked on the user-selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UserChoice {
    /// Index into the listed users (0-based).
    Existing(usize),
    Create,
    Exit,
}

/// Error message for input that is not a valid entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PickError {
    NotANumber,
    OutOfRange,
}

impl std::fmt::Display for PickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Please enter a number."),
            Self::OutOfRange => write!(f, "Invalid choice."),
        }
    }
}

/// Users are numbered from 1; then come "create" and "exit".
pub(crate) fn parse_user_choice(input: &str, user_count: usize) -> Result<UserChoice, PickError> {
    let n: usize = input.trim().parse().map_err(|_| PickError::NotANumber)?;
    match n {
        0 => Err(PickError::OutOfRange),
        n if n <= user_count => Ok(UserChoice::Existing(n - 1)),
        n if n == user_count + 1 => Ok(UserChoice::Create),
        n if n == user_count + 2 => Ok(UserChoice::Exit),
        _ => Err(PickError::OutOfRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Stats));
        assert_eq!(MenuChoice::parse("10"), Some(MenuChoice::SwitchUser));
        assert_eq!(MenuChoice::parse("11"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("stats"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::max(), 10);
    }

    #[test]
    fn test_parse_user_choice() {
        assert_eq!(parse_user_choice("1", 2), Ok(UserChoice::Existing(0)));
        assert_eq!(parse_user_choice("2", 2), Ok(UserChoice::Existing(1)));
        assert_eq!(parse_user_choice("3", 2), Ok(UserChoice::Create));
        assert_eq!(parse_user_choice("4", 2), Ok(UserChoice::Exit));
        assert_eq!(parse_user_choice("5", 2), Err(PickError::OutOfRange));
        assert_eq!(parse_user_choice("0", 2), Err(PickError::OutOfRange));
        assert_eq!(parse_user_choice("x", 2), Err(PickError::NotANumber));
    }

    #[test]
    fn test_parse_user_choice_without_users() {
        assert_eq!(parse_user_choice("1", 0), Ok(UserChoice::Create));
        assert_eq!(parse_user_choice("2", 0), Ok(UserChoice::Exit));
    }
}
