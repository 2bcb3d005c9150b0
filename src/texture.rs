/// A displayable texture owned by a [`TextRenderer`](crate::TextRenderer)
/// backend.
///
/// Dropping the texture releases its backend resource.
pub trait Texture {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}
