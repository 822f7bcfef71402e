/// Visual sort state of a single column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

/// Sort intent as carried in the query string: `column` for ascending,
/// `-column` for descending. An absent parameter means unsorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub column: String,
    pub ascending: bool,
}

impl SortDirective {
    pub fn parse(value: &str) -> Option<Self> {
        let (column, ascending) = match value.strip_prefix('-') {
            Some(rest) => (rest, false),
            None => (value, true),
        };
        // Empty values (including a bare "-") carry no directive
        if column.is_empty() {
            return None;
        }
        Some(SortDirective {
            column: column.to_string(),
            ascending,
        })
    }

    pub fn encode(&self) -> String {
        if self.ascending {
            self.column.clone()
        } else {
            format!("-{}", self.column)
        }
    }

    pub fn state(&self) -> SortState {
        if self.ascending {
            SortState::Ascending
        } else {
            SortState::Descending
        }
    }
}

/// What a toggle does to the query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    Set(SortDirective),
    Clear,
}

pub fn toggle(current: SortState) -> SortState {
    match current {
        SortState::Unsorted => SortState::Ascending,
        SortState::Ascending => SortState::Descending,
        SortState::Descending => SortState::Unsorted,
    }
}

/// One row of the transition table: the next visual state for the clicked
/// column and the matching query parameter action.
pub fn transition(current: SortState, column: &str) -> (SortState, QueryAction) {
    let next = toggle(current);
    let action = match next {
        SortState::Ascending => QueryAction::Set(SortDirective {
            column: column.to_string(),
            ascending: true,
        }),
        SortState::Descending => QueryAction::Set(SortDirective {
            column: column.to_string(),
            ascending: false,
        }),
        SortState::Unsorted => QueryAction::Clear,
    };
    (next, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_all_states() {
        assert_eq!(toggle(SortState::Unsorted), SortState::Ascending);
        assert_eq!(toggle(SortState::Ascending), SortState::Descending);
        assert_eq!(toggle(SortState::Descending), SortState::Unsorted);
    }

    #[test]
    fn parse_plain_value_is_ascending() {
        let d = SortDirective::parse("client").unwrap();
        assert_eq!(d.column, "client");
        assert!(d.ascending);
        assert_eq!(d.state(), SortState::Ascending);
    }

    #[test]
    fn parse_dash_prefix_is_descending() {
        let d = SortDirective::parse("-total").unwrap();
        assert_eq!(d.column, "total");
        assert!(!d.ascending);
        assert_eq!(d.state(), SortState::Descending);
    }

    #[test]
    fn parse_rejects_empty_values() {
        assert_eq!(SortDirective::parse(""), None);
        assert_eq!(SortDirective::parse("-"), None);
    }

    #[test]
    fn encode_roundtrips() {
        for value in ["date", "-date"] {
            let d = SortDirective::parse(value).unwrap();
            assert_eq!(d.encode(), value);
        }
    }

    #[test]
    fn transition_from_unsorted_sets_ascending() {
        let (next, action) = transition(SortState::Unsorted, "date");
        assert_eq!(next, SortState::Ascending);
        assert_eq!(
            action,
            QueryAction::Set(SortDirective {
                column: "date".to_string(),
                ascending: true,
            })
        );
    }

    #[test]
    fn transition_from_ascending_sets_descending() {
        let (next, action) = transition(SortState::Ascending, "date");
        assert_eq!(next, SortState::Descending);
        assert_eq!(
            action,
            QueryAction::Set(SortDirective {
                column: "date".to_string(),
                ascending: false,
            })
        );
    }

    #[test]
    fn transition_from_descending_clears() {
        let (next, action) = transition(SortState::Descending, "date");
        assert_eq!(next, SortState::Unsorted);
        assert_eq!(action, QueryAction::Clear);
    }
}
