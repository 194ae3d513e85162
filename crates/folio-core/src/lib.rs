//! # State, Signals, and Effects
//!
//! folio uses a small reactive core instead of a retained widget tree with
//! mutable fields. There are three main pieces:
//!
//! - `Signal<T>`: observable value with subscribers.
//! - `Scope`: an ownership region that runs cleanups on teardown.
//! - `effect` / `on_unmount`: side-effects with cleanup.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use folio_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers run after every write and may read the signal from inside
//! the callback.
//!
//! ## Effects and cleanup
//!
//! Anything that acquires a host resource (an observer subscription, a
//! timer) returns a [`Dispose`]. Calling `effect` inside `Scope::run` parks
//! the cleanup in that scope:
//!
//! ```rust
//! use folio_core::*;
//!
//! let scope = Scope::new();
//! let released = signal(false);
//! scope.run(|| {
//!     let released = released.clone();
//!     effect(move || on_unmount(move || released.set(true)))
//! });
//! scope.dispose();
//! assert!(released.get());
//! ```
//!
//! - `Dispose::run` is idempotent, so an owner may release early and the
//!   scope's copy becomes a no-op.
//! - Dropping the last handle to a `Scope` runs its cleanups too, so a
//!   component torn down by a panic or an early return still releases what
//!   it acquired.
//!
//! ## Visibility
//!
//! The [`visibility`] module defines the seam to the host's
//! intersection-observation primitive. Components depend on the
//! [`VisibilityObserver`] trait only; hosts live in `folio-web`.

pub mod animation;
pub mod color;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod modifier;
pub mod prelude;
pub mod render_api;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod tests;
pub mod view;
pub mod visibility;

pub use color::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use modifier::*;
pub use prelude::*;
pub use render_api::*;
pub use runtime::*;
pub use signal::*;
pub use view::*;
pub use visibility::*;
