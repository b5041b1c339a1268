use crate::input::{Action, DoublePress};

pub trait ListItem {
    fn title(&self) -> String;
    fn subtitle(&self) -> String;
    fn filter_value(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    /// Typing into the filter prompt; keys go to the filter text.
    Filtering,
    /// Filter text committed; normal navigation on the narrowed list.
    Applied,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ListOutcome<T> {
    Selected(T),
    Consumed,
    Ignored,
}

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Rows one item takes on screen: title, subtitle, spacer.
pub const ITEM_HEIGHT: usize = 3;

#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    title: Option<String>,
    items: Vec<T>,
    /// Indices into `items` that pass the filter, in insertion order.
    visible: Vec<usize>,
    cursor: usize,
    filter: String,
    filter_state: FilterState,
    top: DoublePress,
    page_size: usize,
}

impl<T: ListItem + Clone> SelectableList<T> {
    pub fn new(items: Vec<T>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            title: None,
            items,
            visible,
            cursor: 0,
            filter: String::new(),
            filter_state: FilterState::Unfiltered,
            top: DoublePress::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    pub fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    pub fn selected(&self) -> Option<&T> {
        self.visible.get(self.cursor).map(|&i| &self.items[i])
    }

    /// Items that pass the current filter, in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().map(|&i| &self.items[i])
    }

    pub fn select(&mut self, index: usize) {
        if !self.visible.is_empty() {
            self.cursor = index.min(self.visible.len() - 1);
        }
    }

    pub fn start_filtering(&mut self) {
        self.filter_state = FilterState::Filtering;
    }

    /// Feeds one action to the list. `Ignored` means the caller may interpret it.
    pub fn handle(&mut self, action: &Action) -> ListOutcome<T> {
        if self.is_filtering() {
            return self.handle_filter_input(action);
        }

        if *action == Action::TopPress {
            if self.top.press() {
                self.select(0);
            }
            return ListOutcome::Consumed;
        }
        self.top.reset();

        match action {
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => self.select(self.cursor + 1),
            Action::PageUp => self.cursor = self.cursor.saturating_sub(self.page_size),
            Action::PageDown => self.select(self.cursor + self.page_size),
            Action::Bottom => self.select(self.visible.len().saturating_sub(1)),
            Action::StartFilter => self.start_filtering(),
            Action::Back if self.filter_state == FilterState::Applied => self.clear_filter(),
            Action::Select => {
                return match self.selected() {
                    Some(item) => ListOutcome::Selected(item.clone()),
                    None => ListOutcome::Consumed,
                };
            }
            _ => return ListOutcome::Ignored,
        }
        ListOutcome::Consumed
    }

    fn handle_filter_input(&mut self, action: &Action) -> ListOutcome<T> {
        self.top.reset();
        match action {
            Action::FilterInput(c) => {
                self.filter.push(*c);
                self.apply_filter();
            }
            Action::FilterBackspace => {
                self.filter.pop();
                self.apply_filter();
            }
            Action::FilterAccept => {
                self.filter_state = if self.filter.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::Applied
                };
            }
            Action::FilterCancel => self.clear_filter(),
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => self.select(self.cursor + 1),
            _ => return ListOutcome::Ignored,
        }
        ListOutcome::Consumed
    }

    fn clear_filter(&mut self) {
        self.filter.clear();
        self.filter_state = FilterState::Unfiltered;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                needle.is_empty() || item.filter_value().to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect();
        self.cursor = 0;
    }
}
