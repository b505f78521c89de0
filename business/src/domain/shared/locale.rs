/// Language used for user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Vi => write!(f, "vi"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    /// Accepts a bare language code or a language tag such as `vi-VN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::En),
            "vi" => Ok(Locale::Vi),
            _ => Err(format!("Invalid locale: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn should_parse_bare_language_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("vi".parse::<Locale>(), Ok(Locale::Vi));
    }

    #[test]
    fn should_parse_language_tag_with_region() {
        assert_eq!("vi-VN".parse::<Locale>(), Ok(Locale::Vi));
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
    }

    #[test]
    fn should_reject_unknown_language() {
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn should_display_language_code() {
        assert_eq!(Locale::Vi.to_string(), "vi");
    }
}
