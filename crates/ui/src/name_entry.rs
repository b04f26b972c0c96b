//! Modal text prompt used to name dropped components.

use crate::components::{button, h_stack, v_stack};
use dataflow::{prompt_channel, Prompt, PromptReply, PromptResponder};
use gpui::{
    div, prelude::*, px, App, Context, Entity, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Subscription, Window,
};
use theme::Theme;
use unicode_segmentation::UnicodeSegmentation;

pub enum NameEntryEvent {
    Dismissed,
}

/// A single-line name field with OK and Cancel.
///
/// Dropping an open entry cancels its prompt.
pub struct NameEntry {
    message: SharedString,
    value: String,
    responder: Option<PromptResponder>,
    focus_handle: FocusHandle,
    theme: Theme,
}

impl NameEntry {
    pub fn new(
        message: SharedString,
        responder: PromptResponder,
        theme: Theme,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            message,
            value: String::new(),
            responder: Some(responder),
            focus_handle: cx.focus_handle(),
            theme,
        }
    }

    pub fn message(&self) -> &SharedString {
        &self.message
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_open(&self) -> bool {
        self.responder.is_some()
    }

    pub fn insert(&mut self, text: &str, cx: &mut Context<Self>) {
        self.value.push_str(text);
        cx.notify();
    }

    /// Remove the last grapheme.
    pub fn backspace(&mut self, cx: &mut Context<Self>) {
        let end = self
            .value
            .grapheme_indices(true)
            .next_back()
            .map(|(ix, _)| ix)
            .unwrap_or(0);
        self.value.truncate(end);
        cx.notify();
    }

    pub fn confirm(&mut self, cx: &mut Context<Self>) {
        if let Some(responder) = self.responder.take() {
            log::debug!("name entry confirmed: '{}'", self.value);
            responder.confirm(self.value.clone());
            cx.emit(NameEntryEvent::Dismissed);
        }
    }

    pub fn cancel(&mut self, cx: &mut Context<Self>) {
        if let Some(responder) = self.responder.take() {
            log::debug!("name entry cancelled");
            responder.cancel();
            cx.emit(NameEntryEvent::Dismissed);
        }
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        match keystroke.key.as_str() {
            "enter" => self.confirm(cx),
            "escape" => self.cancel(cx),
            "backspace" => self.backspace(cx),
            _ => {
                if keystroke.modifiers.control || keystroke.modifiers.platform {
                    return;
                }
                if let Some(text) = keystroke.key_char.as_deref() {
                    if !text.chars().any(char::is_control) {
                        self.insert(text, cx);
                    }
                }
            }
        }
        cx.stop_propagation();
    }
}

impl EventEmitter<NameEntryEvent> for NameEntry {}

impl Focusable for NameEntry {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NameEntry {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let focused = self.focus_handle.is_focused(window);

        let field = div()
            .w_full()
            .h(px(28.0))
            .px(px(6.0))
            .flex()
            .items_center()
            .bg(theme.surface_background)
            .border_1()
            .border_color(if focused {
                theme.figure_border
            } else {
                theme.ui_border
            })
            .rounded(px(4.0))
            .text_sm()
            .text_color(theme.ui_text)
            .child(SharedString::from(self.value.clone()))
            .child(div().w(px(1.0)).h(px(16.0)).bg(theme.ui_text));

        let actions = h_stack()
            .justify_end()
            .gap(px(8.0))
            .child(
                button("name-entry-cancel", "Cancel", theme)
                    .on_click(cx.listener(|entry, _, _, cx| entry.cancel(cx))),
            )
            .child(
                button("name-entry-ok", "OK", theme)
                    .on_click(cx.listener(|entry, _, _, cx| entry.confirm(cx))),
            );

        v_stack()
            .id("name-entry")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .w(px(320.0))
            .gap(px(10.0))
            .p(px(12.0))
            .bg(theme.ui_background)
            .border_1()
            .border_color(theme.ui_border)
            .rounded(px(8.0))
            .shadow_lg()
            .child(
                div()
                    .text_sm()
                    .text_color(theme.ui_text)
                    .child(self.message.clone()),
            )
            .child(field)
            .child(actions)
    }
}

/// Hosts at most one open [`NameEntry`]; a new prompt cancels the previous one.
pub struct PromptHost {
    entry: Option<Entity<NameEntry>>,
    theme: Theme,
    needs_focus: bool,
    _subscription: Option<Subscription>,
}

impl PromptHost {
    pub fn new(theme: Theme) -> Self {
        Self {
            entry: None,
            theme,
            needs_focus: false,
            _subscription: None,
        }
    }

    pub fn entry(&self) -> Option<&Entity<NameEntry>> {
        self.entry.as_ref()
    }

    pub fn open(&mut self, message: SharedString, responder: PromptResponder, cx: &mut Context<Self>) {
        if let Some(previous) = self.entry.take() {
            log::debug!("replacing open name entry");
            previous.update(cx, |entry, cx| entry.cancel(cx));
        }

        let theme = self.theme.clone();
        let entry = cx.new(|cx| NameEntry::new(message, responder, theme, cx));
        self._subscription = Some(cx.subscribe(
            &entry,
            |host, entry, _: &NameEntryEvent, cx| {
                if host.entry.as_ref() == Some(&entry) {
                    host.entry = None;
                    cx.notify();
                }
            },
        ));
        self.entry = Some(entry);
        self.needs_focus = true;
        cx.notify();
    }
}

impl Render for PromptHost {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(entry) = self.entry.clone() else {
            return div();
        };
        if std::mem::take(&mut self.needs_focus) {
            entry.read(cx).focus_handle.focus(window);
        }

        div()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(gpui::black().opacity(0.2))
            .child(entry)
    }
}

/// [`Prompt`] that opens a [`NameEntry`] in a [`PromptHost`].
pub struct ModalPrompt {
    host: Entity<PromptHost>,
}

impl ModalPrompt {
    pub fn new(host: Entity<PromptHost>) -> Self {
        Self { host }
    }
}

impl Prompt for ModalPrompt {
    fn prompt_for_value(&self, message: SharedString, cx: &mut App) -> PromptReply {
        let (responder, reply) = prompt_channel();
        self.host
            .update(cx, |host, cx| host.open(message, responder, cx));
        reply
    }
}
