//! Mapping events from rendered markup back to table actions.

use tabula_core::TableAction;

/// An event raised on an element carrying a `data-action` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent<'a> {
    /// The element's `data-action`
    pub action: &'a str,
    /// The element's `data-value`, or the selected option for selects
    pub value: Option<&'a str>,
    /// Whether shift was held
    pub shift: bool,
}

impl<'a> DomEvent<'a> {
    /// Create an event without a value.
    #[must_use]
    pub const fn new(action: &'a str) -> Self {
        Self {
            action,
            value: None,
            shift: false,
        }
    }

    /// Set the value.
    #[must_use]
    pub const fn with_value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Mark shift as held.
    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// The table action this event stands for.
    ///
    /// Unknown actions and missing or malformed values yield `None`.
    #[must_use]
    pub fn to_action(&self) -> Option<TableAction> {
        let action = match self.action {
            "sort" => TableAction::HeaderClicked(self.value?.to_string()),
            "page" => TableAction::PageRequested(self.number()?),
            "previous-page" => TableAction::PreviousPage,
            "next-page" => TableAction::NextPage,
            "page-size" => TableAction::PageSizeRequested(self.number()?),
            "toggle-row" => TableAction::RowToggled {
                index: self.number()?,
                shift: self.shift,
            },
            "toggle-all" => TableAction::AllRowsToggled,
            "expand" => TableAction::RowExpandToggled(self.number()?),
            "toggle-column" => TableAction::ColumnToggled(self.value?.to_string()),
            "retry" => TableAction::RetryClicked,
            other => {
                log::debug!("unknown table event: {other}");
                return None;
            }
        };
        Some(action)
    }

    fn number(&self) -> Option<usize> {
        let value = self.value?;
        match value.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                log::debug!("ignoring {} event with value {value:?}", self.action);
                None
            }
        }
    }
}
