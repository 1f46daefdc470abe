//! Review list, device filter and the submission form
//!
//! The list is held most recent first. Statistics are never stored; they are
//! recomputed from the filtered view every time they are read.

use chrono::{DateTime, Local, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{
        cmd::Cmd,
        msg::review::ReviewMsg,
        state::{input::InputState, selection::SelectionState},
        textarea_engine::TextAreaEngine,
    },
    domain::{
        error::StoreError,
        review::{filter_by_device, DeviceFilter, Rating, Review, ReviewDraft, ReviewIds},
        stats::ReviewStats,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Device,
    Rating,
    Review,
}

impl FormField {
    fn index(&self) -> usize {
        FormField::iter().position(|f| f == *self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        FormField::iter()
            .cycle()
            .nth(self.index() + 1)
            .unwrap_or_default()
    }

    pub fn prev(&self) -> Self {
        let count = FormField::iter().count();
        FormField::iter()
            .nth((self.index() + count - 1) % count)
            .unwrap_or_default()
    }

    /// Fields edited as free text
    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Review)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub name: InputState,
    pub email: InputState,
    /// Index into the device options; `None` until the user picks one
    pub device: Option<usize>,
    /// 0 means no star selected yet
    pub rating: u8,
    pub review: InputState,
    pub focus: FormField,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            name: InputState::single_line(),
            email: InputState::single_line(),
            device: None,
            rating: 0,
            review: InputState::multiline(),
            focus: FormField::default(),
        }
    }
}

impl ReviewForm {
    pub fn focused_input(&self) -> Option<&InputState> {
        match self.focus {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Review => Some(&self.review),
            FormField::Device | FormField::Rating => None,
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut InputState> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Review => Some(&mut self.review),
            FormField::Device | FormField::Rating => None,
        }
    }

    pub fn set_rating(&mut self, rating: u8) {
        if rating <= Rating::MAX {
            self.rating = rating;
        }
    }

    fn step_rating(&mut self, forward: bool) {
        self.rating = if forward {
            (self.rating + 1).min(Rating::MAX)
        } else {
            self.rating.saturating_sub(1).max(Rating::MIN)
        };
    }

    fn step_device(&mut self, options: usize, forward: bool) {
        if options == 0 {
            return;
        }
        self.device = Some(match (self.device, forward) {
            (None, true) => 0,
            (None, false) => options - 1,
            (Some(index), true) => (index + 1) % options,
            (Some(index), false) => (index + options - 1) % options,
        });
    }

    /// Collects the current field values for validation
    pub fn draft(&self, device_options: &[String]) -> ReviewDraft {
        ReviewDraft {
            customer_name: self.name.content.clone(),
            email: self.email.content.clone(),
            device: self
                .device
                .and_then(|index| device_options.get(index))
                .cloned()
                .unwrap_or_default(),
            rating: self.rating,
            review_text: self.review.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewsState {
    reviews: Vec<Review>,
    filter: DeviceFilter,
    selection: SelectionState,
    ids: ReviewIds,
    /// Catalog device names in catalog order
    device_options: Vec<String>,
    form: Option<ReviewForm>,
}

impl ReviewsState {
    pub fn new(reviews: Vec<Review>, device_options: Vec<String>) -> Self {
        let last_id = reviews.iter().map(|review| review.id).max().unwrap_or(0);
        Self {
            reviews,
            ids: ReviewIds::starting_after(last_id),
            device_options,
            ..Default::default()
        }
    }

    /// Every review, most recent first
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn filter(&self) -> &DeviceFilter {
        &self.filter
    }

    pub fn filtered(&self) -> Vec<&Review> {
        filter_by_device(&self.reviews, &self.filter)
    }

    pub fn stats(&self) -> ReviewStats {
        ReviewStats::compute(self.filtered())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    pub fn selected_review(&self) -> Option<&Review> {
        self.filtered()
            .get(self.selection.selected_index()?)
            .copied()
    }

    pub fn device_options(&self) -> &[String] {
        &self.device_options
    }

    pub fn form(&self) -> Option<&ReviewForm> {
        self.form.as_ref()
    }

    pub fn is_composing(&self) -> bool {
        self.form.is_some()
    }

    /// `All` followed by every catalog device
    pub fn filter_options(&self) -> Vec<DeviceFilter> {
        std::iter::once(DeviceFilter::All)
            .chain(self.device_options.iter().cloned().map(DeviceFilter::Device))
            .collect()
    }

    pub fn set_filter(&mut self, filter: DeviceFilter) {
        self.filter = filter;
        let len = self.filtered().len();
        self.selection.clamp(len);
    }

    fn step_filter(&mut self, forward: bool) {
        let options = self.filter_options();
        let count = options.len();
        let current = options
            .iter()
            .position(|option| *option == self.filter)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        if let Some(filter) = options.into_iter().nth(next) {
            self.set_filter(filter);
        }
    }

    /// Validates the draft and puts the new review at the front of the list.
    /// The identifier sequence only advances when the draft is accepted.
    pub fn submit(
        &mut self,
        draft: ReviewDraft,
        now: DateTime<Local>,
    ) -> Result<Review, StoreError> {
        let mut ids = self.ids.clone();
        let id = ids.next(u64::try_from(now.timestamp_millis()).unwrap_or(0));
        let review = draft.into_review(id, now.with_timezone(&Utc).date_naive())?;
        self.ids = ids;
        self.reviews.insert(0, review.clone());
        Ok(review)
    }

    /// Submits the open form; on success the form closes.
    pub fn submit_form(&mut self, now: DateTime<Local>) -> Option<Result<Review, StoreError>> {
        let draft = self.form.as_ref()?.draft(&self.device_options);
        let result = self.submit(draft, now);
        if result.is_ok() {
            self.form = None;
        }
        Some(result)
    }

    /// Handles everything except `Submit`, which needs the clock and raises notices.
    pub fn update(&mut self, msg: ReviewMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        if msg.needs_form() && self.form.is_none() {
            return vec![];
        }
        match msg {
            ReviewMsg::SelectNext => {
                let len = self.filtered().len();
                self.selection.scroll_down(len);
                vec![Cmd::RequestRender]
            }
            ReviewMsg::SelectPrev => {
                self.selection.scroll_up();
                vec![Cmd::RequestRender]
            }
            ReviewMsg::SelectFirst => {
                let len = self.filtered().len();
                self.selection.select_first(len);
                vec![Cmd::RequestRender]
            }
            ReviewMsg::SelectLast => {
                let len = self.filtered().len();
                self.selection.select_last(len);
                vec![Cmd::RequestRender]
            }
            ReviewMsg::NextFilter => {
                self.step_filter(true);
                vec![Cmd::RequestRender]
            }
            ReviewMsg::PrevFilter => {
                self.step_filter(false);
                vec![Cmd::RequestRender]
            }
            ReviewMsg::SetFilter(filter) => {
                self.set_filter(filter);
                vec![Cmd::RequestRender]
            }
            ReviewMsg::OpenForm => {
                self.form = Some(ReviewForm::default());
                vec![Cmd::RequestRender]
            }
            ReviewMsg::CancelForm => {
                self.form = None;
                vec![Cmd::RequestRender]
            }
            ReviewMsg::FocusNextField => {
                self.with_form(|form, _| form.focus = form.focus.next())
            }
            ReviewMsg::FocusPrevField => {
                self.with_form(|form, _| form.focus = form.focus.prev())
            }
            ReviewMsg::SetRating(rating) => self.with_form(|form, _| form.set_rating(rating)),
            ReviewMsg::FormInput(key) => {
                self.with_form(|form, options| apply_form_key(form, key, options, engine))
            }
            ReviewMsg::FormPaste(text) => self.with_form(|form, _| {
                if let Some(input) = form.focused_input_mut() {
                    *input = engine.paste(input, &text);
                }
            }),
            ReviewMsg::Submit => vec![],
        }
    }

    fn with_form(&mut self, f: impl FnOnce(&mut ReviewForm, usize)) -> Vec<Cmd> {
        let options = self.device_options.len();
        match self.form.as_mut() {
            Some(form) => {
                f(form, options);
                vec![Cmd::RequestRender]
            }
            None => vec![],
        }
    }
}

fn apply_form_key(
    form: &mut ReviewForm,
    key: KeyEvent,
    device_options: usize,
    engine: &dyn TextAreaEngine,
) {
    match form.focus {
        FormField::Device => match key.code {
            KeyCode::Left => form.step_device(device_options, false),
            KeyCode::Right | KeyCode::Char(' ') => form.step_device(device_options, true),
            _ => {}
        },
        FormField::Rating => match key.code {
            KeyCode::Left => form.step_rating(false),
            KeyCode::Right => form.step_rating(true),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    form.set_rating(u8::try_from(digit).unwrap_or(0));
                }
            }
            _ => {}
        },
        FormField::Name | FormField::Email | FormField::Review => {
            if let Some(input) = form.focused_input_mut() {
                *input = engine.apply_keys(input, &[key]);
            }
        }
    }
}
