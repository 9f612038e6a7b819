use rand::Rng;
use satzbau_protocol::Ordered;

/// Outcome of a successful rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation<T> {
    /// The next snapshot in enumeration order.
    Rotated(T),
    /// No further snapshot exists; reset with `first()` or stop.
    Exhausted,
}

impl<T> Rotation<T> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Rotation::Exhausted)
    }

    pub fn rotated(self) -> Option<T> {
        match self {
            Rotation::Rotated(value) => Some(value),
            Rotation::Exhausted => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Rotation<U> {
        match self {
            Rotation::Rotated(value) => Rotation::Rotated(f(value)),
            Rotation::Exhausted => Rotation::Exhausted,
        }
    }
}

/// A rendering context that can be walked through its category space.
///
/// Both operations return new snapshots; `self` is never modified.
pub trait Rotatable: Sized {
    type Error;

    /// Same entity with every rotatable category at its first value.
    fn first(&self) -> Self;

    /// Next snapshot in enumeration order.
    fn rotate(&self) -> Result<Rotation<Self>, Self::Error>;
}

/// Iterator over a rotatable value and everything reachable from it.
///
/// Stops after `Rotation::Exhausted` or at the first rotation error, which is
/// kept for inspection.
pub struct Variants<T: Rotatable> {
    pending: Option<T>,
    error: Option<T::Error>,
}

impl<T: Rotatable> Variants<T> {
    /// The error that ended the walk, if it did not end by exhaustion.
    pub fn error(&self) -> Option<&T::Error> {
        self.error.as_ref()
    }

    pub fn into_error(self) -> Option<T::Error> {
        self.error
    }
}

impl<T: Rotatable> Iterator for Variants<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.pending.take()?;
        match current.rotate() {
            Ok(Rotation::Rotated(following)) => self.pending = Some(following),
            Ok(Rotation::Exhausted) => {}
            Err(err) => self.error = Some(err),
        }
        Some(current)
    }
}

/// Walks from `start` (inclusive) in rotation order.
pub fn variants<T: Rotatable>(start: T) -> Variants<T> {
    Variants {
        pending: Some(start),
        error: None,
    }
}

/// Uniformly chosen value of an ordered category.
pub fn random_value<T: Ordered, R: Rng + ?Sized>(rng: &mut R) -> T {
    T::ORDER[rng.gen_range(0..T::ORDER.len())]
}
