/// A lightweight, serializable snapshot of the viewport.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which is handy for
/// restoring the scroll position across sessions without coupling the engine to a UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub viewport_length: f64,
}
