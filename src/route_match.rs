use std::ops::Deref;

use crate::RouteTemplate;

/// This struct represents the output of a successful application of a
/// [`RouteTable`](crate::RouteTable) to a request. It dereferences to
/// the matching [`RouteTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'table> {
    template: &'table RouteTemplate,
    index: usize,
}

impl<'table> Match<'table> {
    pub(crate) fn new(template: &'table RouteTemplate, index: usize) -> Self {
        Self { template, index }
    }

    /// Returns the template that matched
    pub fn template(&self) -> &'table RouteTemplate {
        self.template
    }

    /// Position of the template in registration order
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for Match<'_> {
    type Target = RouteTemplate;

    fn deref(&self) -> &Self::Target {
        self.template
    }
}
