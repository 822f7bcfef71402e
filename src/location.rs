use tracing::trace;
use url::Url;

use crate::sort::{QueryAction, SortDirective};

/// Request for a full navigation, to be executed by the host. The controller
/// never navigates on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: Url,
}

/// Reads the sort directive from the url. The first occurrence of the
/// parameter wins, malformed values count as absent.
pub fn read_directive(url: &Url, param: &str) -> Option<SortDirective> {
    let value = url
        .query_pairs()
        .find(|(key, _)| key.as_ref() == param)
        .map(|(_, value)| value.into_owned())?;
    SortDirective::parse(&value)
}

/// Returns a new url with the sort parameter rewritten.
///
/// All other query pairs survive in their original order. A `Set` replaces an
/// existing occurrence in place (duplicates are dropped) or appends at the
/// end. A `Clear` removes every occurrence, and a query left empty loses its
/// `?` entirely.
pub fn apply(url: &Url, param: &str, action: &QueryAction) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (key, value) in url.query_pairs() {
        if key == param {
            if let QueryAction::Set(directive) = action
                && !replaced
            {
                pairs.push((key.into_owned(), directive.encode()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if let QueryAction::Set(directive) = action
        && !replaced
    {
        pairs.push((param.to_string(), directive.encode()));
    }

    let mut target = url.clone();
    if pairs.is_empty() {
        target.set_query(None);
    } else {
        target
            .query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    trace!("Rewrote {url} => {target}");
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn set(column: &str, ascending: bool) -> QueryAction {
        QueryAction::Set(SortDirective {
            column: column.to_string(),
            ascending,
        })
    }

    #[test]
    fn read_absent_parameter() {
        assert_eq!(read_directive(&url("http://host/list/"), "order_by"), None);
        assert_eq!(
            read_directive(&url("http://host/list/?page=2"), "order_by"),
            None
        );
    }

    #[test]
    fn read_plain_and_dashed_values() {
        let d = read_directive(&url("http://host/list/?order_by=client"), "order_by").unwrap();
        assert_eq!((d.column.as_str(), d.ascending), ("client", true));

        let d = read_directive(&url("http://host/list/?order_by=-client"), "order_by").unwrap();
        assert_eq!((d.column.as_str(), d.ascending), ("client", false));
    }

    #[test]
    fn read_empty_value_counts_as_absent() {
        assert_eq!(
            read_directive(&url("http://host/list/?order_by="), "order_by"),
            None
        );
        assert_eq!(
            read_directive(&url("http://host/list/?order_by=-"), "order_by"),
            None
        );
    }

    #[test]
    fn read_takes_first_occurrence() {
        let d = read_directive(
            &url("http://host/list/?order_by=date&order_by=client"),
            "order_by",
        )
        .unwrap();
        assert_eq!(d.column, "date");
    }

    #[test]
    fn set_appends_when_absent() {
        let target = apply(&url("http://host/list/?page=2"), "order_by", &set("date", true));
        assert_eq!(target.as_str(), "http://host/list/?page=2&order_by=date");
    }

    #[test]
    fn set_replaces_in_place() {
        let target = apply(
            &url("http://host/list/?order_by=date&page=2"),
            "order_by",
            &set("date", false),
        );
        assert_eq!(target.as_str(), "http://host/list/?order_by=-date&page=2");
    }

    #[test]
    fn set_collapses_duplicates() {
        let target = apply(
            &url("http://host/list/?order_by=a&page=2&order_by=b"),
            "order_by",
            &set("client", true),
        );
        assert_eq!(target.as_str(), "http://host/list/?order_by=client&page=2");
    }

    #[test]
    fn clear_removes_parameter_and_keeps_the_rest() {
        let target = apply(
            &url("http://host/list/?page=2&order_by=-date"),
            "order_by",
            &QueryAction::Clear,
        );
        assert_eq!(target.as_str(), "http://host/list/?page=2");
    }

    #[test]
    fn clear_drops_empty_query() {
        let target = apply(
            &url("http://host/list/?order_by=date"),
            "order_by",
            &QueryAction::Clear,
        );
        assert_eq!(target.as_str(), "http://host/list/");
        assert_eq!(target.query(), None);
    }

    #[test]
    fn clear_on_clean_url_is_identity() {
        let target = apply(&url("http://host/list/"), "order_by", &QueryAction::Clear);
        assert_eq!(target.as_str(), "http://host/list/");
    }
}
