use smartcow::SmartCow;

/// The part of an incoming request that routing looks at: the method and
/// the raw url. Borrowed input is not copied.
#[derive(Debug, Clone)]
pub struct MatchRequest<'a> {
    method: SmartCow<'a>,
    url: SmartCow<'a>,
}

impl<'a> MatchRequest<'a> {
    pub fn new(method: impl Into<SmartCow<'a>>, url: impl Into<SmartCow<'a>>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }

    /// Builds a request whose url is the raw concatenation of a mount
    /// point and the path below it, as frameworks that strip a base path
    /// report them. No slashes are added or removed.
    pub fn from_parts(
        method: impl Into<SmartCow<'a>>,
        base_path: &'a str,
        sub_path: &'a str,
    ) -> Self {
        let url: SmartCow<'a> = match (base_path.is_empty(), sub_path.is_empty()) {
            (_, true) => base_path.into(),
            (true, false) => sub_path.into(),
            (false, false) => format!("{base_path}{sub_path}").into(),
        };

        Self {
            method: method.into(),
            url,
        }
    }

    /// the request method, case preserved
    pub fn method(&self) -> &str {
        &self.method
    }

    /// the raw, un-normalized request url
    pub fn url(&self) -> &str {
        &self.url
    }
}
