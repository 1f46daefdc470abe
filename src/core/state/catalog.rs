//! Device grid with a debounced search box

use crate::{
    core::{
        cmd::Cmd,
        msg::catalog::CatalogMsg,
        state::{input::InputState, selection::SelectionState},
        textarea_engine::TextAreaEngine,
    },
    domain::catalog::{Catalog, Device},
};

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Catalog,
    search: InputState,
    search_focused: bool,
    /// Term of the last filter pass; lags `search` by the debounce delay
    applied_query: String,
    selection: SelectionState,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self) -> &InputState {
        &self.search
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    /// Devices passing the last applied search, in catalog order
    pub fn visible_devices(&self) -> Vec<&Device> {
        self.catalog.search(&self.applied_query)
    }

    pub fn selected_device(&self) -> Option<&Device> {
        let index = self.selection.selected_index()?;
        self.visible_devices().get(index).copied()
    }

    pub fn update(&mut self, msg: CatalogMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            CatalogMsg::FocusSearch => {
                self.search_focused = true;
                vec![Cmd::RequestRender]
            }
            CatalogMsg::BlurSearch => {
                self.search_focused = false;
                vec![Cmd::RequestRender]
            }
            CatalogMsg::SearchInput(key) => {
                if !self.search_focused {
                    return vec![];
                }
                let edited = engine.apply_keys(&self.search, &[key]);
                self.replace_search(edited)
            }
            CatalogMsg::SearchPaste(text) => {
                if !self.search_focused {
                    return vec![];
                }
                let edited = engine.paste(&self.search, &text);
                self.replace_search(edited)
            }
            CatalogMsg::ApplySearch(query) => {
                log::debug!("Applying catalog search: {query:?}");
                self.applied_query = query;
                let len = self.visible_devices().len();
                self.selection.clamp(len);
                vec![Cmd::RequestRender]
            }
            CatalogMsg::SelectNext => {
                let len = self.visible_devices().len();
                self.selection.scroll_down(len);
                vec![Cmd::RequestRender]
            }
            CatalogMsg::SelectPrev => {
                self.selection.scroll_up();
                vec![Cmd::RequestRender]
            }
            CatalogMsg::SelectFirst => {
                let len = self.visible_devices().len();
                self.selection.select_first(len);
                vec![Cmd::RequestRender]
            }
            CatalogMsg::SelectLast => {
                let len = self.visible_devices().len();
                self.selection.select_last(len);
                vec![Cmd::RequestRender]
            }
        }
    }

    /// Only a content change schedules a filter pass; cursor moves just redraw.
    fn replace_search(&mut self, edited: InputState) -> Vec<Cmd> {
        let changed = edited.content != self.search.content;
        self.search = edited;
        if changed {
            vec![
                Cmd::ScheduleSearch {
                    query: self.search.content.clone(),
                },
                Cmd::RequestRender,
            ]
        } else {
            vec![Cmd::RequestRender]
        }
    }
}
