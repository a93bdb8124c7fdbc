//!
//! The CPU classification rule.
//!

pub mod cascade;

use crate::scan;

///
/// The submission text a rule inspects.
///
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    /// The cleaned CPU name.
    pub cleaned: &'a str,
    /// The CPU name as reported.
    pub raw: &'a str,
    /// The machine name.
    pub machine: &'a str,
}

///
/// The rule condition.
///
#[derive(Debug)]
pub enum Matcher {
    /// The cleaned name contains one of the substrings.
    Contains(&'static [&'static str]),
    /// The cleaned name equals one of the strings.
    Equals(&'static [&'static str]),
    /// The cleaned name starts with the prefix.
    StartsWith(&'static str),
    /// The pattern matches the cleaned name. Anchor it with `^` to match at the start only.
    Pattern(regex::Regex),
    /// The CPU name as reported contains the substring.
    RawContains(&'static str),
    /// The machine name equals the string.
    MachineEquals(&'static str),
}

///
/// The brand produced by a rule.
///
#[derive(Debug)]
pub enum Brand {
    /// A fixed brand.
    Fixed(&'static str),
    /// The prefix followed by the second word of the cleaned name.
    SecondWord(&'static str),
}

///
/// The model produced by a rule.
///
/// The matched text is the pattern match for `Matcher::Pattern` and the
/// whole cleaned name otherwise.
///
#[derive(Debug)]
pub enum Model {
    /// A fixed model.
    Fixed(&'static str),
    /// The fixed model with a ` Xeon` suffix when the cleaned name mentions Xeon.
    XeonSuffixed(&'static str),
    /// The whole cleaned name.
    Cleaned,
    /// The prefix followed by the matched text.
    Matched(&'static str),
    /// The prefix followed by a capture group of the pattern.
    Group(&'static str, usize),
    /// The prefix followed by the cleaned name without its first characters.
    Tail(&'static str, usize),
    /// The uppercase cleaned name without its first characters.
    Uppercase(usize),
    /// The word of the cleaned name at the given position.
    Word(usize),
    /// The words of the cleaned name from the given position on.
    Words(usize),
    /// The matched text with the substitutions applied in order.
    Rewritten(&'static [(&'static str, &'static str)]),
}

///
/// An ordered classification rule.
///
#[derive(Debug)]
pub struct Rule {
    /// Whether the rule only applies to names mentioning Xeon.
    pub xeon_only: bool,
    /// The condition.
    pub matcher: Matcher,
    /// The brand produced on a match.
    pub brand: Brand,
    /// The model produced on a match.
    pub model: Model,
}

impl Rule {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(matcher: Matcher, brand: Brand, model: Model) -> Self {
        Self {
            xeon_only: false,
            matcher,
            brand,
            model,
        }
    }

    ///
    /// A shortcut constructor for rules that only apply to Xeon names.
    ///
    pub fn xeon(matcher: Matcher, brand: Brand, model: Model) -> Self {
        Self {
            xeon_only: true,
            ..Self::new(matcher, brand, model)
        }
    }

    ///
    /// Classifies the subject, returning the brand and model if the rule matches.
    ///
    pub fn apply(&self, subject: &Subject) -> Option<(String, String)> {
        let is_xeon = subject.cleaned.to_lowercase().contains("xeon");
        if self.xeon_only && !is_xeon {
            return None;
        }

        let cleaned = subject.cleaned;
        let mut captures = None;
        let matched = match &self.matcher {
            Matcher::Contains(needles) => needles
                .iter()
                .any(|needle| cleaned.contains(needle))
                .then_some(cleaned)?,
            Matcher::Equals(candidates) => candidates
                .iter()
                .any(|candidate| *candidate == cleaned)
                .then_some(cleaned)?,
            Matcher::StartsWith(prefix) => cleaned.starts_with(prefix).then_some(cleaned)?,
            Matcher::Pattern(pattern) => {
                let found = pattern.captures(cleaned)?;
                let matched = found.get(0).map(|group| group.as_str()).unwrap_or_default();
                captures = Some(found);
                matched
            }
            Matcher::RawContains(needle) => subject.raw.contains(needle).then_some(cleaned)?,
            Matcher::MachineEquals(machine) => (subject.machine == *machine).then_some(cleaned)?,
        };

        let words: Vec<&str> = cleaned.split_whitespace().collect();
        let brand = match self.brand {
            Brand::Fixed(brand) => brand.to_owned(),
            Brand::SecondWord(prefix) => match words.get(1) {
                Some(word) => format!("{prefix}{word}"),
                None => prefix.trim_end().to_owned(),
            },
        };
        let model = match self.model {
            Model::Fixed(model) => model.to_owned(),
            Model::XeonSuffixed(model) if is_xeon => format!("{model} Xeon"),
            Model::XeonSuffixed(model) => model.to_owned(),
            Model::Cleaned => cleaned.to_owned(),
            Model::Matched(prefix) => format!("{prefix}{matched}"),
            Model::Group(prefix, index) => {
                let group = captures
                    .as_ref()
                    .and_then(|captures| captures.get(index))
                    .map(|group| group.as_str())
                    .unwrap_or_default();
                format!("{prefix}{group}")
            }
            Model::Tail(prefix, skip) => format!("{prefix}{}", scan::skip_chars(cleaned, skip)),
            Model::Uppercase(skip) => {
                scan::skip_chars(cleaned.to_uppercase().as_str(), skip).to_owned()
            }
            Model::Word(index) => words
                .get(index)
                .map(|word| (*word).to_owned())
                .unwrap_or_else(|| cleaned.to_owned()),
            Model::Words(skip) => match words.get(skip..) {
                Some(rest) if !rest.is_empty() => rest.join(" "),
                _ => cleaned.to_owned(),
            },
            Model::Rewritten(substitutions) => substitutions
                .iter()
                .fold(matched.to_owned(), |model, (from, to)| model.replace(from, to)),
        };

        Some((brand, model))
    }
}
