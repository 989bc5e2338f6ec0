//! Pixel provider contract

use crate::color::Rgb24;

/// Answers "what color is this pixel" for the paint engine
///
/// Must be total over the panel's coordinate space and free of side
/// effects: the engine may ask about the same coordinate more than once and
/// expects the same answer unless the provider's own state changed in
/// between. Queries are synchronous and happen inside `tick()`, so they
/// should be cheap.
pub trait PixelProvider {
    /// Composited color at `(x, y)`
    fn pixel(&self, x: u16, y: u16) -> Rgb24;
}

/// A solid fill
impl PixelProvider for Rgb24 {
    fn pixel(&self, _x: u16, _y: u16) -> Rgb24 {
        *self
    }
}

impl<P: PixelProvider + ?Sized> PixelProvider for &P {
    fn pixel(&self, x: u16, y: u16) -> Rgb24 {
        (**self).pixel(x, y)
    }
}

/// Adapts a closure into a [`PixelProvider`]
///
/// ```
/// use tessera_core::traits::{PixelProvider, ProviderFn};
/// use tessera_core::Rgb24;
///
/// let stripes = ProviderFn(|x: u16, _y: u16| {
///     if x % 2 == 0 { Rgb24::WHITE } else { Rgb24::BLACK }
/// });
/// assert_eq!(stripes.pixel(4, 0), Rgb24::WHITE);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProviderFn<F>(pub F);

impl<F> PixelProvider for ProviderFn<F>
where
    F: Fn(u16, u16) -> Rgb24,
{
    fn pixel(&self, x: u16, y: u16) -> Rgb24 {
        (self.0)(x, y)
    }
}
