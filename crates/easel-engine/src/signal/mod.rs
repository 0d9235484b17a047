//! Reactive values.
//!
//! A [`Signal`] is either a constant or a function sampled on every read.
//! Nothing is cached and nothing is pushed: a consumer that wants the
//! current value calls [`Signal::get`] at the moment it needs it, which is
//! what keeps node properties live until the scene is sampled.
//!
//! A [`SignalCell`] is a settable source. Signals derived from it observe
//! every later `set` the next time they are sampled.
//!
//! Both types are single-threaded (`Rc`) handles; cloning is cheap and
//! shares the underlying source.

mod cell;
mod value;

pub use cell::SignalCell;
pub use value::Signal;
