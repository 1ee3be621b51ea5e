use smartstring::alias::String as SmartString;
use std::fmt::{self, Display, Formatter};

/// One path component of a [`RouteTemplate`](crate::RouteTemplate).
///
/// Parameter names are kept for display and diagnostics only; matching
/// never binds them.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum SegmentSpec {
    /// a literal component, compared case-sensitively
    Static(SmartString),

    /// `:name`, exactly one request segment
    Required(SmartString),

    /// `(:name)`, zero or one request segment
    Optional(SmartString),
}

impl SegmentSpec {
    /// whether this segment must consume a request segment
    pub fn is_mandatory(&self) -> bool {
        !matches!(self, SegmentSpec::Optional(_))
    }

    /// the parameter name, if this is a parameter segment
    pub fn name(&self) -> Option<&str> {
        match self {
            SegmentSpec::Static(_) => None,
            SegmentSpec::Required(name) | SegmentSpec::Optional(name) => Some(name),
        }
    }
}

impl Display for SegmentSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SegmentSpec::Static(s) => f.write_str(s),
            SegmentSpec::Required(p) => f.write_fmt(format_args!(":{p}")),
            SegmentSpec::Optional(p) => f.write_fmt(format_args!("(:{p})")),
        }
    }
}
