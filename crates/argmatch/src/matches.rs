//! Typed result container populated by the matcher.

use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::InvalidValue;

/// The populated result of matching one command level.
///
/// Holds the matched flags, the ordered raw values per option/positional,
/// at most one nested subcommand match, and the declared defaults for
/// arguments that received no value. Built once per parse call and not
/// mutated afterward; insertion order is preserved so two parses of the
/// same input are structurally equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgMatches {
    flags: IndexMap<String, bool>,
    values: IndexMap<String, Vec<String>>,
    defaults: IndexMap<String, String>,
    subcommand: Option<Box<(String, ArgMatches)>>,
}

impl ArgMatches {
    /// Whether the named flag was matched. `false` when the name is absent
    /// or does not refer to a flag.
    pub fn get_flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// The first stored value, falling back to the declared default.
    pub fn get_one(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .or_else(|| self.defaults.get(name))
            .map(String::as_str)
    }

    /// [`Self::get_one`] parsed into `T`.
    ///
    /// A failed conversion is reported as [`InvalidValue`]; it is a usage
    /// error distinct from the matching errors.
    pub fn get_one_as<T>(&self, name: &str) -> Result<Option<T>, InvalidValue>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get_one(name) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|e| invalid_value(name, raw, e)),
            None => Ok(None),
        }
    }

    /// All stored values, in the order they were consumed. Defaults are
    /// never reported here; an argument with no supplied value yields an
    /// empty slice.
    pub fn get_many(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// [`Self::get_many`] with every value parsed into `T`.
    pub fn get_many_as<T>(&self, name: &str) -> Result<Vec<T>, InvalidValue>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get_many(name)
            .iter()
            .map(|raw| raw.parse::<T>().map_err(|e| invalid_value(name, raw, e)))
            .collect()
    }

    /// The one nested subcommand match, if a subcommand was dispatched.
    /// Ownership stays with this `ArgMatches`.
    pub fn subcommand(&self) -> Option<(&str, &ArgMatches)> {
        self.subcommand
            .as_deref()
            .map(|(name, matches)| (name.as_str(), matches))
    }

    pub(crate) fn set_flag(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    pub(crate) fn add_value(&mut self, name: &str, value: &str) {
        self.values
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Replace any stored values with a single one (non-`multiple`
    /// arguments keep at most one value; the last occurrence wins).
    pub(crate) fn set_value(&mut self, name: &str, value: &str) {
        let slot = self.values.entry(name.to_string()).or_default();
        slot.clear();
        slot.push(value.to_string());
    }

    pub(crate) fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub(crate) fn set_default(&mut self, name: &str, rendered: String) {
        self.defaults.insert(name.to_string(), rendered);
    }

    pub(crate) fn set_subcommand(&mut self, name: &str, matches: ArgMatches) {
        self.subcommand = Some(Box::new((name.to_string(), matches)));
    }
}

fn invalid_value(name: &str, raw: &str, err: impl std::fmt::Display) -> InvalidValue {
    InvalidValue {
        arg: name.to_string(),
        value: raw.to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_lookup_defaults_to_false() {
        let mut matches = ArgMatches::default();
        matches.set_flag("verbose", true);
        assert!(matches.get_flag("verbose"));
        assert!(!matches.get_flag("quiet"));
    }

    #[test]
    fn single_and_many_value_lookup() {
        let mut matches = ArgMatches::default();
        matches.add_value("output", "file.txt");
        assert_eq!(matches.get_one("output"), Some("file.txt"));

        matches.add_value("files", "file1.txt");
        matches.add_value("files", "file2.txt");
        assert_eq!(matches.get_many("files"), ["file1.txt", "file2.txt"]);
        assert!(matches.get_many("missing").is_empty());
    }

    #[test]
    fn defaults_back_get_one_but_not_get_many() {
        let mut matches = ArgMatches::default();
        matches.set_default("fps", "60".to_string());
        assert_eq!(matches.get_one("fps"), Some("60"));
        assert!(matches.get_many("fps").is_empty());

        matches.add_value("fps", "24");
        assert_eq!(matches.get_one("fps"), Some("24"));
    }

    #[test]
    fn typed_lookup_parses_and_reports_bad_values() {
        let mut matches = ArgMatches::default();
        matches.add_value("fps", "60");
        assert_eq!(matches.get_one_as::<u32>("fps"), Ok(Some(60)));
        assert_eq!(matches.get_one_as::<u32>("missing"), Ok(None));

        matches.set_value("fps", "fast");
        let err = matches.get_one_as::<u32>("fps").unwrap_err();
        assert_eq!(err.arg, "fps");
        assert_eq!(err.value, "fast");
    }

    #[test]
    fn set_value_keeps_a_single_entry() {
        let mut matches = ArgMatches::default();
        matches.set_value("output", "a.txt");
        matches.set_value("output", "b.txt");
        assert_eq!(matches.get_many("output"), ["b.txt"]);
    }

    #[test]
    fn typed_many_lookup() {
        let mut matches = ArgMatches::default();
        matches.add_value("port", "80");
        matches.add_value("port", "443");
        assert_eq!(matches.get_many_as::<u16>("port"), Ok(vec![80, 443]));
    }
}
