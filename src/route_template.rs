use crate::{
    path::normalize,
    verb::{is_token_byte, WILDCARD_VERB},
    SegmentSpec, TemplateSyntaxError, VerbSpec,
};
use smartstring::alias::String as SmartString;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Routegate's representation of a parsed route template
///
/// A template has the form `/<verb>_<path>`, for example
/// `/get_/api/parse/(:route)` or `/:verb_/api/v1/:id`. It holds the
/// source string, the [`VerbSpec`] and an ordered sequence of
/// [`SegmentSpec`]s. Repeated and trailing slashes in the path are
/// insignificant.
#[derive(Eq, Debug, Clone)]
pub struct RouteTemplate {
    source: SmartString,
    verb: VerbSpec,
    segments: Vec<SegmentSpec>,
    min_segments: usize,
}

impl PartialEq for RouteTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.verb == other.verb && self.segments == other.segments
    }
}

impl Display for RouteTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("/{}_", self.verb))?;
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            f.write_fmt(format_args!("/{segment}"))?;
        }
        Ok(())
    }
}

impl RouteTemplate {
    /// The template string this was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn verb(&self) -> &VerbSpec {
        &self.verb
    }

    /// Slice accessor for the component [`SegmentSpec`]s of this template
    pub fn segments(&self) -> &[SegmentSpec] {
        self.segments.as_slice()
    }

    /// Does this template accept `method` and the raw `path`?
    pub fn matches(&self, method: &str, path: &str) -> bool {
        self.matches_segments(method, &normalize(path))
    }

    /// Like [`RouteTemplate::matches`], for a path that has already been
    /// split into non-empty segments.
    pub fn matches_segments(&self, method: &str, path: &[&str]) -> bool {
        self.verb.accepts(method)
            && self.passes_optimization_criteria(path)
            && align(&self.segments, path)
    }

    #[inline]
    fn passes_optimization_criteria(&self, path: &[&str]) -> bool {
        (self.min_segments..=self.segments.len()).contains(&path.len())
    }

    fn compute_optimizations(&mut self) {
        self.min_segments = self.segments.iter().filter(|s| s.is_mandatory()).count();
    }

    fn optimize(mut self) -> Self {
        self.compute_optimizations();
        self
    }
}

/// Aligns template segments against request segments, left to right.
///
/// An optional segment first tries to consume a request segment and only
/// skips it when the rest of the template then fails to align.
fn align(template: &[SegmentSpec], path: &[&str]) -> bool {
    let Some((segment, rest)) = template.split_first() else {
        return path.is_empty();
    };

    match (segment, path.split_first()) {
        (SegmentSpec::Static(text), Some((first, tail))) => {
            *first == text.as_str() && align(rest, tail)
        }

        (SegmentSpec::Required(_), Some((first, tail))) => !first.is_empty() && align(rest, tail),

        (SegmentSpec::Optional(_), Some((_, tail))) => align(rest, tail) || align(rest, path),

        (SegmentSpec::Optional(_), None) => align(rest, path),

        (_, None) => false,
    }
}

fn parse_verb(template: &str, token: &str) -> Result<VerbSpec, TemplateSyntaxError> {
    if token.is_empty() {
        return Err(TemplateSyntaxError::EmptyVerb {
            template: template.into(),
        });
    }

    if token == WILDCARD_VERB {
        return Ok(VerbSpec::Wildcard);
    }

    if token.bytes().all(is_token_byte) {
        Ok(VerbSpec::Literal(SmartString::from(token)))
    } else {
        Err(TemplateSyntaxError::InvalidVerb {
            template: template.into(),
            verb: token.into(),
        })
    }
}

fn parse_segment(template: &str, section: &str) -> Result<SegmentSpec, TemplateSyntaxError> {
    let unnamed = || TemplateSyntaxError::UnnamedParam {
        template: template.into(),
        segment: section.into(),
    };
    let unclosed = || TemplateSyntaxError::UnclosedOptional {
        template: template.into(),
        segment: section.into(),
    };

    if let Some(group) = section.strip_prefix('(') {
        let inner = group.strip_suffix(')').ok_or_else(unclosed)?;
        if inner.contains(['(', ')']) {
            return Err(unclosed());
        }

        return match inner.strip_prefix(':') {
            Some("") => Err(unnamed()),
            Some(name) => Ok(SegmentSpec::Optional(SmartString::from(name))),
            None => Err(TemplateSyntaxError::OptionalWithoutParam {
                template: template.into(),
                segment: section.into(),
            }),
        };
    }

    if section.ends_with(')') {
        return Err(unclosed());
    }

    match section.strip_prefix(':') {
        Some("") => Err(unnamed()),
        Some(name) => Ok(SegmentSpec::Required(SmartString::from(name))),
        None => Ok(SegmentSpec::Static(SmartString::from(section))),
    }
}

impl FromStr for RouteTemplate {
    type Err = TemplateSyntaxError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let rest = source
            .strip_prefix('/')
            .ok_or_else(|| TemplateSyntaxError::MissingLeadingSlash {
                template: source.into(),
            })?;

        let (verb, path) =
            rest.split_once('_')
                .ok_or_else(|| TemplateSyntaxError::MissingVerbDelimiter {
                    template: source.into(),
                })?;

        let verb = parse_verb(source, verb)?;

        if !path.starts_with('/') {
            return Err(TemplateSyntaxError::MissingPathSlash {
                template: source.into(),
            });
        }

        let segments = normalize(path)
            .into_iter()
            .map(|section| parse_segment(source, section))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: SmartString::from(source),
            verb,
            segments,
            min_segments: 0,
        }
        .optimize())
    }
}

impl TryFrom<&str> for RouteTemplate {
    type Error = TemplateSyntaxError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for RouteTemplate {
    type Error = TemplateSyntaxError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&String> for RouteTemplate {
    type Error = TemplateSyntaxError;
    fn try_from(s: &String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
