use std::fmt;
use std::rc::Rc;

use crate::coords::{CornerRadii, Vec2};
use crate::paint::{Color, LinearGradient, Paint};

/// A value that is either constant or computed at read time.
#[derive(Clone)]
pub struct Signal<T>(Source<T>);

#[derive(Clone)]
enum Source<T> {
    Constant(T),
    Derived(Rc<dyn Fn() -> T>),
}

impl<T: Clone + 'static> Signal<T> {
    #[inline]
    pub fn constant(value: T) -> Self {
        Self(Source::Constant(value))
    }

    /// A signal that calls `f` each time it is sampled.
    #[inline]
    pub fn derive(f: impl Fn() -> T + 'static) -> Self {
        Self(Source::Derived(Rc::new(f)))
    }

    /// Samples the current value.
    #[inline]
    pub fn get(&self) -> T {
        match &self.0 {
            Source::Constant(v) => v.clone(),
            Source::Derived(f) => f(),
        }
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self.0, Source::Constant(_))
    }

    /// Derived signal applying `f` to every sample of `self`.
    ///
    /// Constants stay constant: `f` is applied once, eagerly.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(T) -> U + 'static) -> Signal<U> {
        match &self.0 {
            Source::Constant(v) => Signal::constant(f(v.clone())),
            Source::Derived(_) => {
                let this = self.clone();
                Signal::derive(move || f(this.get()))
            }
        }
    }

    /// Pairs two signals into one sampled together.
    pub fn zip<U: Clone + 'static>(&self, other: &Signal<U>) -> Signal<(T, U)> {
        if self.is_constant() && other.is_constant() {
            return Signal::constant((self.get(), other.get()));
        }
        let (a, b) = (self.clone(), other.clone());
        Signal::derive(move || (a.get(), b.get()))
    }

    /// Collects several signals into one multi-component signal.
    pub fn combine(parts: Vec<Signal<T>>) -> Signal<Vec<T>> {
        if parts.iter().all(Signal::is_constant) {
            return Signal::constant(parts.iter().map(Signal::get).collect());
        }
        Signal::derive(move || parts.iter().map(Signal::get).collect())
    }
}

impl Signal<Vec2> {
    /// Joins independent x / y signals into a position-like signal.
    pub fn from_xy(x: impl Into<Signal<f32>>, y: impl Into<Signal<f32>>) -> Self {
        let (x, y): (Signal<f32>, Signal<f32>) = (x.into(), y.into());
        x.zip(&y).map(|(x, y)| Vec2::new(x, y))
    }
}

impl Signal<CornerRadii> {
    /// Recombines four independently reactive corner radii.
    pub fn from_corners(corners: [Signal<f32>; 4]) -> Self {
        Signal::combine(corners.into()).map(|r| CornerRadii::new(r[0], r[1], r[2], r[3]))
    }
}

impl<T: Default + Clone + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::constant(T::default())
    }
}

impl<T: Clone + 'static> From<T> for Signal<T> {
    #[inline]
    fn from(value: T) -> Self {
        Signal::constant(value)
    }
}

impl From<&str> for Signal<String> {
    #[inline]
    fn from(value: &str) -> Self {
        Signal::constant(value.to_owned())
    }
}

// Fill / stroke slots hold `Option<Paint>` so that "no fill" is a value,
// distinct from "not set".

impl From<Paint> for Signal<Option<Paint>> {
    #[inline]
    fn from(paint: Paint) -> Self {
        Signal::constant(Some(paint))
    }
}

impl From<Color> for Signal<Option<Paint>> {
    #[inline]
    fn from(color: Color) -> Self {
        Signal::constant(Some(Paint::Solid(color)))
    }
}

impl From<LinearGradient> for Signal<Option<Paint>> {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Signal::constant(Some(Paint::LinearGradient(gradient)))
    }
}

impl From<Signal<Color>> for Signal<Option<Paint>> {
    #[inline]
    fn from(color: Signal<Color>) -> Self {
        color.map(|c| Some(Paint::Solid(c)))
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Source::Constant(v) => f.debug_tuple("Signal::Constant").field(v).finish(),
            Source::Derived(_) => f.write_str("Signal::Derived(..)"),
        }
    }
}
