//! Rendering the action of a mapping on a few elements.
use std::fmt::Display;

use crate::action::LeftAction;
use crate::error::Error;

/// Render the action of `action` on each of `elements` as `x --> y` pairs.
///
/// Pairs are separated by `; `, e.g. `1 --> 2; 2 --> 3; 3 --> 1`. Returns an error if `action`
/// fails on any element.
pub fn render<T, A>(elements: &[T], action: &A) -> Result<String, Error>
where
    T: Display,
    A: LeftAction<T> + ?Sized,
{
    let pairs = elements
        .iter()
        .map(|el| Ok(format!("{} --> {}", el, action.left_apply(el)?)))
        .collect::<Result<Vec<String>, Error>>()?;

    Ok(pairs.join("; "))
}
