//! Argument descriptors and the compact declaration shorthand.

/// What an [`Arg`] is, which decides how the matcher binds tokens to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Boolean, present or absent, never carries a value.
    Flag,
    /// Named, consumes one or more following tokens as value(s).
    Option,
    /// Identified by position rather than a leading marker.
    Positional,
}

/// A typed default for an option or positional.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(String),
}

impl DefaultValue {
    /// Rendering used in help text: strings double-quoted, chars
    /// single-quoted, everything else bare.
    pub fn render_help(&self) -> String {
        match self {
            Self::Char(c) => format!("'{c}'"),
            Self::Str(s) => format!("\"{s}\""),
            other => other.render_value(),
        }
    }

    /// Unquoted rendering, used when a default stands in for a missing value.
    pub fn render_value(&self) -> String {
        match self {
            Self::Bool(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::Uint(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Char(v) => v.to_string(),
            Self::Str(v) => v.clone(),
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for DefaultValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for DefaultValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for DefaultValue {
    fn from(v: u32) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<u64> for DefaultValue {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for DefaultValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<char> for DefaultValue {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for DefaultValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// Immutable descriptor of one declared argument.
///
/// Built with the named constructors ([`Arg::flag`], [`Arg::option`],
/// [`Arg::positional`]) followed by chained configuration, or with the
/// compact [`arg`] shorthand. Invariant violations are programmer errors
/// and panic at construction time.
#[derive(Debug, Clone)]
pub struct Arg {
    kind: ArgKind,
    name: String,
    short_alias: Option<char>,
    long_alias: Option<String>,
    about: String,
    value_name: Option<String>,
    default_value: Option<DefaultValue>,
    required: bool,
    multiple: bool,
}

impl Arg {
    fn new(kind: ArgKind, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "argument must have a name");
        Self {
            kind,
            name,
            short_alias: None,
            long_alias: None,
            about: String::new(),
            value_name: None,
            default_value: None,
            required: false,
            multiple: false,
        }
    }

    /// A boolean flag.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(ArgKind::Flag, name)
    }

    /// A named option that consumes value token(s).
    pub fn option(name: impl Into<String>) -> Self {
        Self::new(ArgKind::Option, name)
    }

    /// A positional argument.
    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(ArgKind::Positional, name)
    }

    /// Single-letter alias, matched as `-x`.
    pub fn short_alias(mut self, short: char) -> Self {
        assert!(
            self.kind != ArgKind::Positional,
            "a positional never carries aliases"
        );
        assert!(short.is_ascii_alphabetic(), "short alias must be a letter");
        self.short_alias = Some(short);
        self
    }

    /// Long alias, matched as `--name`. Non-positionals fall back to the
    /// argument name when no explicit long alias is set.
    pub fn long_alias(mut self, long: impl Into<String>) -> Self {
        assert!(
            self.kind != ArgKind::Positional,
            "a positional never carries aliases"
        );
        let long = long.into();
        assert!(!long.is_empty(), "long alias must not be empty");
        self.long_alias = Some(long);
        self
    }

    /// Description shown in help output.
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    /// Display hint for the consumed value, rendered as `<name>` in help.
    pub fn value_name(mut self, value_name: impl Into<String>) -> Self {
        assert!(
            self.kind != ArgKind::Flag,
            "a flag never carries a value name"
        );
        self.value_name = Some(value_name.into());
        self
    }

    /// Typed default, used when no value was supplied.
    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Allow the argument to bind more than one value.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> Option<char> {
        self.short_alias
    }

    /// The explicit long alias, if any.
    pub fn long(&self) -> Option<&str> {
        self.long_alias.as_deref()
    }

    pub fn get_about(&self) -> &str {
        &self.about
    }

    pub fn get_value_name(&self) -> Option<&str> {
        self.value_name.as_deref()
    }

    pub fn get_default(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// The name a `--token` is matched against: the explicit long alias,
    /// or the argument name for non-positionals.
    pub(crate) fn long_or_name(&self) -> Option<&str> {
        match self.kind {
            ArgKind::Positional => None,
            _ => Some(self.long_alias.as_deref().unwrap_or(&self.name)),
        }
    }

    pub(crate) fn matches_long(&self, text: &str) -> bool {
        self.long_or_name() == Some(text)
    }

    pub(crate) fn matches_short(&self, letter: char) -> bool {
        self.kind != ArgKind::Positional && self.short_alias == Some(letter)
    }
}

/// Compact argument shorthand.
///
/// - `"-v --verbose"` declares a flag named `verbose` with short alias `v`
///   and long alias `verbose` (either alias may stand alone);
/// - `"<name>"` declares a required positional;
/// - `"[name]"` declares an optional positional.
///
/// Malformed specs are programmer errors and panic.
pub fn arg(spec: &str) -> Arg {
    let spec = spec.trim();
    assert!(!spec.is_empty(), "empty argument spec");

    if let Some(inner) = spec.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        assert!(!inner.is_empty(), "positional spec must have a name: {spec}");
        return Arg::positional(inner).required(true);
    }
    if let Some(inner) = spec.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        assert!(!inner.is_empty(), "positional spec must have a name: {spec}");
        return Arg::positional(inner);
    }

    let mut short = None;
    let mut long = None;
    for part in spec.split_whitespace() {
        if let Some(rest) = part.strip_prefix("--") {
            assert!(!rest.is_empty(), "malformed long alias in spec: {spec}");
            assert!(long.is_none(), "duplicate long alias in spec: {spec}");
            long = Some(rest.to_string());
        } else if let Some(rest) = part.strip_prefix('-') {
            let mut chars = rest.chars();
            let letter = chars.next();
            assert!(
                letter.is_some_and(|c| c.is_ascii_alphabetic()) && chars.next().is_none(),
                "short alias must be a single letter: {spec}"
            );
            assert!(short.is_none(), "duplicate short alias in spec: {spec}");
            short = letter;
        } else {
            panic!("unrecognized token '{part}' in argument spec: {spec}");
        }
    }

    let name = long
        .clone()
        .or_else(|| short.map(String::from))
        .expect("argument spec must declare at least one alias");
    let mut built = Arg::flag(name);
    if let Some(letter) = short {
        built = built.short_alias(letter);
    }
    if let Some(long) = long {
        built = built.long_alias(long);
    }
    built
}
