//! Input event vocabulary delivered by the windowing backend.

/// Pointer buttons the editor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the editor reacts to.
///
/// The backend maps its own key identifiers into this closed set; anything
/// else arrives as `Other` and is ignored by the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Return,
    Escape,
    Other,
}

/// One raw input event, as produced by the backend event loop.
///
/// `PointerMoved` carries coordinates; button and key events refer to the
/// pointer position the dispatcher tracks from the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerMoved { x: i32, y: i32 },
    ButtonPressed { button: MouseButton },
    ButtonReleased { button: MouseButton },
    KeyPressed { key: Key },
}
