mod base;
mod dropdown;
mod frame;
mod multi_select;
mod search_line;
mod single_select;
mod single_select_input_text;
mod theme;

pub use base::*;
pub use dropdown::RowMarker;
pub use frame::{DisplayLine, SelectFrame};
pub use multi_select::*;
pub use search_line::SearchLine;
pub use single_select::*;
pub use single_select_input_text::*;
pub use theme::SelectTheme;

use enum_dispatch::enum_dispatch;
use ratatui::{
    crossterm::event::{KeyEvent, MouseEvent},
    layout::Rect,
    Frame,
};

use crate::{form::FieldKind, select::Selection};

use super::event::EventResult;

#[enum_dispatch]
pub trait WidgetTrait {
    fn id(&self) -> &str;

    fn kind(&self) -> FieldKind;

    /// None for a field that could not be mounted
    fn selection(&self) -> Option<Selection>;

    /// Rows wanted in the current state
    fn height(&self) -> u16;

    fn chunk(&self) -> Rect;

    fn update_chunk(&mut self, chunk: Rect);

    fn on_key_event(&mut self, ev: KeyEvent) -> EventResult;

    fn on_mouse_event(&mut self, ev: MouseEvent) -> EventResult;

    /// The field became the active one through Tab order
    fn on_focus(&mut self);

    fn on_blur(&mut self);

    /// A click landed on another field or outside every field
    fn on_outside_click(&mut self);

    /// Typing was redirected to this field
    fn focus_search(&mut self);

    fn clear_mouse_over(&mut self);
}

#[enum_dispatch]
pub trait RenderTrait {
    fn render(&mut self, f: &mut Frame, is_active: bool, is_mouse_over: bool);
}

#[enum_dispatch(WidgetTrait, RenderTrait)]
#[derive(Debug)]
pub enum Widget {
    MultiSelect(MultiSelectForm),
    SingleSelect(SingleSelectForm),
    SingleSelectInputText(SingleSelectInputTextForm),
}
