use tracing::{debug, trace};
use url::Url;

use crate::header::HeaderSet;
use crate::location::{self, Navigation};
use crate::sort;

pub const DEFAULT_ORDER_PARAM: &str = "order_by";

/// Cycles a column through ascending, descending and unsorted, keeping the
/// query parameter and the header markers in step. Stateless across page
/// loads, everything it knows comes from the url and the header set.
pub struct SortToggle {
    param: String,
}

impl Default for SortToggle {
    fn default() -> Self {
        SortToggle::new(DEFAULT_ORDER_PARAM)
    }
}

impl SortToggle {
    pub fn new(param: impl Into<String>) -> Self {
        SortToggle {
            param: param.into(),
        }
    }

    /// Page load: mark the header named by the url's directive, if any.
    /// A directive naming no known header is silently ignored.
    pub fn initialize(&self, url: &Url, headers: &mut HeaderSet) {
        let Some(directive) = location::read_directive(url, &self.param) else {
            trace!("No sort directive in {url}");
            return;
        };
        trace!("Initializing from directive {:?}", directive.encode());
        headers.mark(&directive.column, directive.state());
    }

    /// Header click: clear every marker, advance the clicked header one step
    /// in the cycle and return the navigation the host should perform.
    pub fn toggle(&self, key: &str, url: &Url, headers: &mut HeaderSet) -> Navigation {
        let current = headers.state_of(key);
        // Clearing happens unconditionally, single column sort only
        headers.clear_states();

        let (next, action) = sort::transition(current, key);
        headers.mark(key, next);

        let target = location::apply(url, &self.param, &action);
        debug!("Toggle {key}: {current:?} -> {next:?}, navigate to {target}");
        Navigation { target }
    }
}
