//! # Routegate
//!
//! Decides whether any registered route template accepts an http
//! request, and reports [`RouteNotFound`] when none does.
//!
//! Templates look like `/<verb>_<path>`:
//!
//! * `/get_/api/apple/:id`: `GET` (any case) with a required segment
//! * `/get_/api/parse/(:route)`: an optional trailing segment
//! * `/:verb_/api/v1/:id`: any method
//! * `/post_///`: runs of slashes are insignificant, this matches `POST /`
//!
//! ```
//! use routegate::{MatchRequest, RouteTable};
//!
//! let table = RouteTable::parse([
//!     "/get_/api/parse/(:route)",
//!     "/:verb_/api/v1/:id",
//! ])?;
//!
//! assert!(table.is_match(&MatchRequest::new("GET", "/api/parse/45")));
//! assert!(table.is_match(&MatchRequest::from_parts("get", "/api/parse", "/")));
//! assert!(table.is_match(&MatchRequest::new("post", "/api/v1/abcd")));
//!
//! let err = table
//!     .find_match(&MatchRequest::from_parts("get", "/fake/v1", "/index"))
//!     .unwrap_err();
//! assert_eq!(err.http_verb(), "get");
//! assert_eq!(err.request_url(), "/fake/v1/index");
//! # Ok::<(), routegate::TemplateSyntaxError>(())
//! ```
//!
//! Matching only answers yes or no. Parameter names in templates are
//! not bound to values.

mod error;
mod gate;
mod path;
mod request;
mod route_match;
mod route_template;
mod router;
mod segment;
mod verb;

pub use error::{RouteNotFound, TemplateSyntaxError};
pub use gate::{RouteNotFoundGate, RouteSource};
pub use path::normalize;
pub use request::MatchRequest;
pub use route_match::Match;
pub use route_template::RouteTemplate;
pub use router::RouteTable;
pub use segment::SegmentSpec;
pub use verb::{VerbSpec, WILDCARD_VERB};
