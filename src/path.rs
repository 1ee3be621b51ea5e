#[cfg(feature = "memchr")]
use std::iter;

/// A request path split into its non-empty `/`-delimited components.
///
/// Repeated, leading and trailing slashes carry no meaning, so
/// `"/a//b///"` and `"a/b"` produce the same segments.
#[derive(Debug)]
pub(crate) struct Path<'a> {
    pub(crate) str: &'a str,
    pub(crate) segments: Vec<&'a str>,
}

impl<'a> From<&'a str> for Path<'a> {
    fn from(str: &'a str) -> Self {
        Self {
            str,
            segments: normalize(str),
        }
    }
}

/// Split `path` on `/`, discarding empty components.
pub fn normalize(path: &str) -> Vec<&str> {
    #[cfg(feature = "memchr")]
    {
        let mut segments = vec![];
        let mut start = 0;
        for index in memchr::memchr_iter(b'/', path.as_bytes()).chain(iter::once(path.len())) {
            if index > start {
                segments.push(&path[start..index]);
            }
            start = index + 1;
        }
        segments
    }

    #[cfg(not(feature = "memchr"))]
    path.split('/').filter(|s| !s.is_empty()).collect()
}
