use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Signal;

/// A settable reactive source.
///
/// ```
/// use easel_engine::signal::SignalCell;
///
/// let time = SignalCell::new(0.0f32);
/// let doubled = time.map(|t| t * 2.0);
/// time.set(1.5);
/// assert_eq!(doubled.get(), 3.0);
/// ```
#[derive(Clone)]
pub struct SignalCell<T>(Rc<RefCell<T>>);

impl<T: Clone + 'static> SignalCell<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }

    #[inline]
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Replaces the value with `f(current)`.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.0.borrow());
        self.set(next);
    }

    /// A live view of this cell.
    pub fn signal(&self) -> Signal<T> {
        let cell = self.clone();
        Signal::derive(move || cell.get())
    }

    /// Shorthand for `self.signal().map(f)`.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(T) -> U + 'static) -> Signal<U> {
        self.signal().map(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for SignalCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SignalCell").field(&*self.0.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_observes_later_sets() {
        let cell = SignalCell::new(1);
        let view = cell.signal();
        cell.set(5);
        assert_eq!(view.get(), 5);
    }

    #[test]
    fn update_applies_function() {
        let cell = SignalCell::new(10);
        cell.update(|v| v + 1);
        assert_eq!(cell.get(), 11);
    }

    #[test]
    fn map_tracks_the_cell() {
        let cell = SignalCell::new(String::from("a"));
        let len = cell.map(|s| s.len());
        cell.set("abc".into());
        assert_eq!(len.get(), 3);
    }
}
