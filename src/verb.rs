use smartstring::alias::String as SmartString;
use std::fmt::{self, Display, Formatter};

/// The verb token that matches every request method.
pub const WILDCARD_VERB: &str = ":verb";

/// The HTTP method half of a [`RouteTemplate`](crate::RouteTemplate)
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum VerbSpec {
    /// a method name as written in the template, compared ascii-case-insensitively
    Literal(SmartString),

    /// `:verb`
    Wildcard,
}

impl VerbSpec {
    /// Does a request with this method satisfy the verb?
    pub fn accepts(&self, method: &str) -> bool {
        match self {
            VerbSpec::Wildcard => true,
            VerbSpec::Literal(verb) => verb.eq_ignore_ascii_case(method),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, VerbSpec::Wildcard)
    }
}

impl Display for VerbSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VerbSpec::Literal(verb) => f.write_str(verb),
            VerbSpec::Wildcard => f.write_str(WILDCARD_VERB),
        }
    }
}

/// RFC 9110 `tchar`, minus `_` which separates the verb from the path.
pub(crate) fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'`'
                | b'|'
                | b'~'
        )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn literal_verbs_ignore_case() {
        let verb = VerbSpec::Literal("get".into());
        assert!(verb.accepts("GET"));
        assert!(verb.accepts("geT"));
        assert!(!verb.accepts("post"));
        assert!(!verb.accepts("gets"));
    }

    #[test]
    fn wildcard_accepts_anything() {
        assert!(VerbSpec::Wildcard.accepts("POST"));
        assert!(VerbSpec::Wildcard.accepts("get"));
        assert!(VerbSpec::Wildcard.accepts("PROPFIND"));
        assert_eq!(VerbSpec::Wildcard.to_string(), ":verb");
    }
}
