pub use crate::animation::*;
pub use crate::color::Color;
pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::error::*;
pub use crate::geometry::{Rect, Size, Transform};
pub use crate::modifier::{
    AlignItems, Border, BorderSide, FlexDirection, JustifyContent, Modifier, PaddingValues,
    PositionType,
};
pub use crate::render_api::RenderBackend;
pub use crate::runtime::Scheduler;
pub use crate::scope::{Scope, current_scope};
pub use crate::signal::{Signal, signal};
pub use crate::view::{FontFamily, TextSpan, TextStyle, TextTag, View, ViewId, ViewKind};
pub use crate::visibility::{
    IntersectionCallback, IntersectionEntry, ObserveOptions, SharedObserver, VisibilityObserver,
};
