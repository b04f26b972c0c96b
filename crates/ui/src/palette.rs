//! Library palette: component types that can be dragged onto a dataflow.

use crate::components::v_stack;
use gpui::{
    div, prelude::*, px, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};
use theme::Theme;
use workflow::{DropPayload, TypeLibrary};

/// Lists the types of a [`TypeLibrary`] as drag sources.
pub struct ComponentPalette {
    library: TypeLibrary,
    theme: Theme,
}

impl ComponentPalette {
    pub fn new(library: TypeLibrary, theme: Theme) -> Self {
        Self { library, theme }
    }

    /// Payloads for every entry, in display order.
    pub fn payloads(&self) -> Vec<DropPayload> {
        let mut payloads: Vec<_> = self
            .library
            .iter()
            .map(|ty| DropPayload::object_type(ty.name.clone(), ty.module_path.clone()))
            .collect();
        payloads.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        payloads
    }
}

impl Render for ComponentPalette {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();
        let hover_bg = theme.hover;

        let entries = self.payloads().into_iter().enumerate().map(|(ix, payload)| {
            let preview_theme = theme.clone();
            div()
                .id(("palette-entry", ix))
                .px(px(8.0))
                .py(px(4.0))
                .rounded(px(4.0))
                .cursor_grab()
                .hover(move |d| d.bg(hover_bg))
                .child(
                    div()
                        .text_sm()
                        .text_color(theme.ui_text)
                        .child(SharedString::from(payload.display_name.clone())),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(theme.ui_text_muted)
                        .child(SharedString::from(payload.type_path.clone())),
                )
                .on_drag(payload, move |payload, _offset, _window, cx| {
                    let theme = preview_theme.clone();
                    cx.new(|_| DragPreview::new(payload.display_name.clone(), theme))
                })
        });

        v_stack()
            .id("component-palette")
            .size_full()
            .overflow_y_scroll()
            .gap(px(2.0))
            .p(px(4.0))
            .bg(theme.ui_background)
            .border_r_1()
            .border_color(theme.ui_border)
            .child(
                div()
                    .px(px(8.0))
                    .py(px(6.0))
                    .text_xs()
                    .text_color(theme.ui_text_muted)
                    .child("Library"),
            )
            .children(entries)
    }
}

/// Label that follows the cursor while a palette entry is dragged.
pub struct DragPreview {
    label: SharedString,
    theme: Theme,
}

impl DragPreview {
    pub fn new(label: impl Into<SharedString>, theme: Theme) -> Self {
        Self {
            label: label.into(),
            theme,
        }
    }
}

impl Render for DragPreview {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px(px(8.0))
            .py(px(4.0))
            .rounded(px(4.0))
            .bg(self.theme.component_fill)
            .border_1()
            .border_color(self.theme.component_border)
            .text_sm()
            .text_color(self.theme.ui_text)
            .child(self.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workflow::ComponentType;

    #[test]
    fn test_payloads_are_sorted_object_types() {
        let library = TypeLibrary::default()
            .with(ComponentType::new("Paraboloid", "examples.Paraboloid"))
            .with(ComponentType::new("Driver", "drivers.Driver"));
        let palette = ComponentPalette::new(library, Theme::light());

        let payloads = palette.payloads();
        let names: Vec<_> = payloads.iter().map(|p| p.display_name.as_str()).collect();
        assert_eq!(names, ["Assembly", "Driver", "Paraboloid"]);
        assert!(payloads.iter().all(DropPayload::is_object_type));
        assert_eq!(payloads[2].type_path, "examples.Paraboloid");
    }
}
