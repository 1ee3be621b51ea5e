use crate::{path::Path, Match, MatchRequest, RouteNotFound, RouteTemplate, TemplateSyntaxError};

/// An ordered, append-only list of parsed [`RouteTemplate`]s.
///
/// Templates are tried in the order they were added and the first one
/// that accepts a request wins; there is no specificity ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    templates: Vec<RouteTemplate>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and appends a template.
    pub fn add<R>(&mut self, route: R) -> Result<(), <R as TryInto<RouteTemplate>>::Error>
    where
        R: TryInto<RouteTemplate>,
    {
        self.templates.push(route.try_into()?);
        Ok(())
    }

    /// Builds a table from raw templates, stopping at the first one that
    /// does not parse.
    pub fn parse<I>(routes: I) -> Result<Self, TemplateSyntaxError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        routes
            .into_iter()
            .map(|route| route.as_ref().parse::<RouteTemplate>())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteTemplate> {
        self.templates.iter()
    }

    /// Returns the first template, in registration order, that accepts
    /// the request, or a [`RouteNotFound`] carrying the original method
    /// and url.
    pub fn find_match<'a>(&'a self, request: &MatchRequest<'_>) -> Result<Match<'a>, RouteNotFound> {
        let method = request.method();
        let path = Path::from(request.url());

        #[cfg(feature = "log")]
        log::trace!("{method} {:?}", path.segments);

        self.templates
            .iter()
            .enumerate()
            .find(|(_, template)| {
                let accepted = template.matches_segments(method, &path.segments);
                #[cfg(feature = "log")]
                log::trace!("{template}: {accepted}");
                accepted
            })
            .map(|(index, template)| Match::new(template, index))
            .ok_or_else(|| {
                #[cfg(feature = "log")]
                log::debug!("no route found for {method} {}", path.str);
                RouteNotFound::new(method, path.str)
            })
    }

    pub fn is_match(&self, request: &MatchRequest<'_>) -> bool {
        self.find_match(request).is_ok()
    }
}

impl FromIterator<RouteTemplate> for RouteTable {
    fn from_iter<T: IntoIterator<Item = RouteTemplate>>(iter: T) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl Extend<RouteTemplate> for RouteTable {
    fn extend<T: IntoIterator<Item = RouteTemplate>>(&mut self, iter: T) {
        self.templates.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteTemplate;
    type IntoIter = std::slice::Iter<'a, RouteTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
