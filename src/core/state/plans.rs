use crate::{
    core::{cmd::Cmd, msg::plans::PlansMsg, state::selection::SelectionState},
    domain::plan::{Plan, PlanBook},
};

#[derive(Debug, Clone, Default)]
pub struct PlansState {
    plans: PlanBook,
    selection: SelectionState,
}

impl PlansState {
    pub fn new(plans: PlanBook) -> Self {
        let mut selection = SelectionState::new();
        selection.select_first(plans.len());
        Self { plans, selection }
    }

    pub fn plans(&self) -> &[Plan] {
        self.plans.plans()
    }

    pub fn book(&self) -> &PlanBook {
        &self.plans
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.plans.plans().get(self.selection.selected_index()?)
    }

    pub fn update(&mut self, msg: PlansMsg) -> Vec<Cmd> {
        let len = self.plans.len();
        match msg {
            PlansMsg::SelectNext => self.selection.scroll_down(len),
            PlansMsg::SelectPrev => self.selection.scroll_up(),
            PlansMsg::SelectFirst => self.selection.select_first(len),
            PlansMsg::SelectLast => self.selection.select_last(len),
        }
        vec![Cmd::RequestRender]
    }
}
