//! Workbench UI components: layout helpers, the component palette and the
//! name entry prompt.

mod components;
mod name_entry;
mod palette;

pub use components::{button, h_stack, panel, v_stack};
pub use name_entry::{ModalPrompt, NameEntry, NameEntryEvent, PromptHost};
pub use palette::{ComponentPalette, DragPreview};
