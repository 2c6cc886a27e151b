//! Server-supported locales and layout direction.

use std::fmt;
use std::str::FromStr;

/// Locales with a server-rendered route and a hand-written bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LocaleCode {
    #[default]
    En,
    Fr,
    Ar,
    De,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Scripts written right-to-left, keyed by primary language subtag.
    const RTL_LANGUAGES: &'static [&'static str] =
        &["ar", "he", "fa", "ur", "ps", "yi", "dv", "ckb", "sd", "ug"];

    /// Direction for an arbitrary language tag such as `"ar"` or `"he-IL"`.
    pub fn for_language(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if Self::RTL_LANGUAGES.contains(&primary.as_str()) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl LocaleCode {
    /// Order of the language button's cycle.
    pub const ALL: [LocaleCode; 4] = [LocaleCode::En, LocaleCode::Fr, LocaleCode::Ar, LocaleCode::De];

    pub fn as_str(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Fr => "fr",
            LocaleCode::Ar => "ar",
            LocaleCode::De => "de",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocaleCode::En => "EN",
            LocaleCode::Fr => "FR",
            LocaleCode::Ar => "AR",
            LocaleCode::De => "DE",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            LocaleCode::En => "🇬🇧",
            LocaleCode::Fr => "🇫🇷",
            LocaleCode::Ar => "🇸🇦",
            LocaleCode::De => "🇩🇪",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            LocaleCode::Ar => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Whether a free-form language names this locale (`"EN"`, `" en "`).
    pub fn matches(self, lang: &str) -> bool {
        lang.trim().eq_ignore_ascii_case(self.as_str())
    }

    /// Parse a locale, falling back to the default for unknown codes.
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale `{}`", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for LocaleCode {
    type Err = UnknownLocale;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.matches(raw))
            .ok_or_else(|| UnknownLocale(raw.to_string()))
    }
}

/// Equivalent of `path` under `target`: the leading locale segment (if any)
/// is replaced, everything after it is kept.
///
/// `/fr/projects` → `/de/projects`, `/` → `/de`, `/about` → `/de/about`.
pub fn localized_path(path: &str, target: LocaleCode) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    let remainder = if first.parse::<LocaleCode>().is_ok() {
        rest.unwrap_or_default().to_string()
    } else {
        trimmed.to_string()
    };

    let remainder = remainder.trim_end_matches('/');
    if remainder.is_empty() {
        format!("/{target}")
    } else {
        format!("/{target}/{remainder}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_locale() {
        let mut seen = vec![LocaleCode::En];
        let mut current = LocaleCode::En.next();
        while current != LocaleCode::En {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen, LocaleCode::ALL.to_vec());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("FR".parse::<LocaleCode>(), Ok(LocaleCode::Fr));
        assert_eq!(" ar ".parse::<LocaleCode>(), Ok(LocaleCode::Ar));
        assert!("it".parse::<LocaleCode>().is_err());
        assert_eq!(LocaleCode::parse_or_default("klingon"), LocaleCode::En);
    }

    #[test]
    fn only_arabic_locale_is_rtl() {
        assert_eq!(LocaleCode::Ar.direction(), Direction::Rtl);
        assert_eq!(LocaleCode::De.direction(), Direction::Ltr);
    }

    #[test]
    fn freeform_direction_uses_primary_subtag() {
        assert_eq!(Direction::for_language("he-IL"), Direction::Rtl);
        assert_eq!(Direction::for_language("FA"), Direction::Rtl);
        assert_eq!(Direction::for_language("it"), Direction::Ltr);
        assert_eq!(Direction::for_language(""), Direction::Ltr);
    }

    #[test]
    fn localized_path_swaps_the_locale_segment() {
        assert_eq!(localized_path("/fr/projects", LocaleCode::De), "/de/projects");
        assert_eq!(localized_path("/fr", LocaleCode::De), "/de");
        assert_eq!(localized_path("/", LocaleCode::Ar), "/ar");
        assert_eq!(localized_path("", LocaleCode::Ar), "/ar");
        assert_eq!(localized_path("/en/contact/", LocaleCode::Fr), "/fr/contact");
        assert_eq!(localized_path("/contact", LocaleCode::Fr), "/fr/contact");
    }
}
