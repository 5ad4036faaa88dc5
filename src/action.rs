//! Actions of mappings on elements.
use crate::error::Error;

/// Left action on `T`.
///
/// Values of implementing types act on `T` values on the left, the way a function acts on its
/// argument. Acting on a value the implementor is not defined for fails.
pub trait LeftAction<T> {
    /// Act on a value on the left.
    fn left_apply(&self, value: &T) -> Result<T, Error>;

    /// Act on a value, in place, on the left.
    fn left_apply_to(&self, value: &mut T) -> Result<(), Error> {
        *value = self.left_apply(value)?;
        Ok(())
    }

    /// Act on every value of a slice, in place, on the left.
    ///
    /// On failure the slice is left unchanged.
    fn left_apply_to_slice(&self, values: &mut [T]) -> Result<(), Error> {
        let images = values
            .iter()
            .map(|value| self.left_apply(value))
            .collect::<Result<Vec<T>, Error>>()?;

        for (value, image) in values.iter_mut().zip(images) {
            *value = image;
        }
        Ok(())
    }
}
