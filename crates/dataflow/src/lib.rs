//! Dataflow surface and drop-target panel.
//!
//! The [`DataflowPanel`] draws one workflow scope as a [`DataflowFigure`] on a
//! [`Surface`], accepts component types dropped from the palette, asks a
//! [`Prompt`] for a name and adds the component through the shared
//! [`workflow::DataflowModel`].

mod element;
mod figure;
mod panel;
mod pending;
mod prompt;
mod settings;
mod surface;
mod viewport;

pub use element::SurfaceElement;
pub use figure::{ComponentBox, DataflowFigure, DisplayItem, FigureNode};
pub use panel::{DataflowPanel, PanelEvent};
pub use pending::PendingDrop;
pub use prompt::{prompt_channel, Prompt, PromptReply, PromptResponder};
pub use settings::{Background, PanelSettings};
pub use surface::{CompartmentHit, FigureId, Surface};
pub use viewport::Viewport;
