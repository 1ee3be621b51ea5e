use thiserror::Error;

/// A route template that cannot be parsed. These are configuration
/// errors and surface when routes are loaded, never per request.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateSyntaxError {
    /// The template does not begin with `/`.
    #[error("route template `{template}` must start with `/`")]
    MissingLeadingSlash { template: String },

    /// No `_` separates the verb from the path.
    #[error("route template `{template}` has no `_` between verb and path")]
    MissingVerbDelimiter { template: String },

    /// Nothing between the leading `/` and the `_`.
    #[error("route template `{template}` has an empty verb")]
    EmptyVerb { template: String },

    /// The verb is neither an http method token nor `:verb`.
    #[error("route template `{template}` has invalid verb `{verb}`, expected a method name or `:verb`")]
    InvalidVerb { template: String, verb: String },

    /// The path after `_` does not begin with `/`.
    #[error("the path in route template `{template}` must start with `/`")]
    MissingPathSlash { template: String },

    /// `:` or `(:)` without a name.
    #[error("params must be named, found `{segment}` in route template `{template}`")]
    UnnamedParam { template: String, segment: String },

    /// Unbalanced optional-group parentheses.
    #[error("unbalanced parentheses in `{segment}` of route template `{template}`")]
    UnclosedOptional { template: String, segment: String },

    /// `(text)` whose content is not a `:param`.
    #[error("only params can be optional, replace `{segment}` in route template `{template}` with `(:name)`")]
    OptionalWithoutParam { template: String, segment: String },
}

/// No registered route template matches the request.
///
/// Routing is deterministic, so retrying the same request cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: no route matches {http_verb} {request_url}", kind = Self::KIND)]
pub struct RouteNotFound {
    http_verb: String,
    request_url: String,
}

impl RouteNotFound {
    /// The discriminator reported by [`RouteNotFound::kind`].
    pub const KIND: &'static str = "RouteNotFound";

    pub fn new(http_verb: impl Into<String>, request_url: impl Into<String>) -> Self {
        Self {
            http_verb: http_verb.into(),
            request_url: request_url.into(),
        }
    }

    /// fixed error-kind discriminator, always [`RouteNotFound::KIND`]
    pub fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// the request method, in its original case
    pub fn http_verb(&self) -> &str {
        &self.http_verb
    }

    /// the request url exactly as received, before normalization
    pub fn request_url(&self) -> &str {
        &self.request_url
    }
}
