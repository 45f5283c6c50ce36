use image::{DynamicImage, GenericImageView};

/// Crops a page into its left and right halves.
///
/// Two-column word books list entries down each column; recognizing the
/// halves separately keeps the engine from reading across the gutter and
/// interleaving the columns. Purely geometric — any skew was handled
/// before this point.
pub fn split_columns(image: &DynamicImage) -> (DynamicImage, DynamicImage) {
    let (width, height) = image.dimensions();
    let mid = width / 2;
    let left = image.crop_imm(0, 0, mid, height);
    let right = image.crop_imm(mid, 0, width - mid, height);
    (left, right)
}
