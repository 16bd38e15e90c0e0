//! Y-axis label template: `"{:8.2} "` style, parsed once, applied per row.

use std::{fmt, str::FromStr};

use crate::core::{
    constants::{DEFAULT_LABEL_PRECISION, DEFAULT_LABEL_SUFFIX, DEFAULT_LABEL_WIDTH},
    error::ConfigError,
};

/// Right-aligned fixed-point label with literal text on either side.
///
/// Accepted templates contain exactly one placeholder `{}` or `{:[>]W[.P][f]}`,
/// e.g. `"{:8.2} "`, `"{:>6.1f}%"`, `"$ {:.0}"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelFormat {
    prefix: String,
    width: usize,
    precision: Option<usize>,
    suffix: String,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            width: DEFAULT_LABEL_WIDTH,
            precision: Some(DEFAULT_LABEL_PRECISION),
            suffix: DEFAULT_LABEL_SUFFIX.to_owned(),
        }
    }
}

impl LabelFormat {
    /// Bare `{:width.precision}` with no surrounding text.
    #[must_use]
    pub fn new(width: usize, precision: usize) -> Self {
        Self {
            prefix: String::new(),
            width,
            precision: Some(precision),
            suffix: String::new(),
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let bad = || ConfigError::InvalidFormat(template.to_owned());

        let open = template.find('{').ok_or_else(bad)?;
        let close = open + template[open..].find('}').ok_or_else(bad)?;
        let (prefix, spec, suffix) = (
            &template[..open],
            &template[open + 1..close],
            &template[close + 1..],
        );
        if [prefix, suffix].iter().any(|s| s.contains(['{', '}'])) {
            return Err(bad());
        }

        let mut fmt = Self {
            prefix: prefix.to_owned(),
            width: 0,
            precision: None,
            suffix: suffix.to_owned(),
        };
        if spec.is_empty() {
            return Ok(fmt);
        }
        let spec = spec.strip_prefix(':').ok_or_else(bad)?;
        let spec = spec.strip_prefix('>').unwrap_or(spec);
        let spec = spec.strip_suffix('f').unwrap_or(spec);
        let (width, precision) = match spec.split_once('.') {
            Some((w, p)) => (w, Some(p)),
            None => (spec, None),
        };
        if !width.is_empty() {
            fmt.width = width.parse().map_err(|_| bad())?;
        }
        if let Some(p) = precision {
            fmt.precision = Some(p.parse().map_err(|_| bad())?);
        }
        Ok(fmt)
    }

    #[must_use]
    pub fn render(&self, value: f64) -> String {
        let width = self.width;
        match self.precision {
            Some(p) => format!("{}{value:>width$.p$}{}", self.prefix, self.suffix),
            None => format!("{}{value:>width$}{}", self.prefix, self.suffix),
        }
    }
}

impl FromStr for LabelFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{:{}", self.prefix, self.width)?;
        if let Some(p) = self.precision {
            write!(f, ".{p}")?;
        }
        write!(f, "}}{}", self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_template() {
        assert_eq!(LabelFormat::default(), LabelFormat::parse("{:8.2f} ").unwrap());
        assert_eq!(LabelFormat::default().render(4.0), "    4.00 ");
        assert_eq!(LabelFormat::default().render(-12.25), "  -12.25 ");
    }

    #[test]
    fn prefix_suffix_and_bare_placeholder() {
        let f = LabelFormat::parse("$ {:>6.1}%").unwrap();
        assert_eq!(f.render(7.06), "$    7.1%");
        assert_eq!(LabelFormat::parse("{}").unwrap().render(2.5), "2.5");
        assert_eq!(LabelFormat::parse("{:.0}").unwrap().render(2.4), "2");
    }

    #[test]
    fn rejects_malformed_templates() {
        for t in ["8.2", "{:8.2", "{:x}", "{:8.2}{}", "{8}"] {
            assert_eq!(
                LabelFormat::parse(t),
                Err(ConfigError::InvalidFormat(t.to_owned())),
                "{t}"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let f = LabelFormat::new(5, 1).with_suffix(" |");
        assert_eq!(f.to_string().parse::<LabelFormat>().unwrap(), f);
    }
}
