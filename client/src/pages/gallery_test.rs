use super::*;

const H: GalleryImage = GalleryImage { src: "h.jpg", alt: "h", orientation: Orientation::Horizontal };
const V: GalleryImage = GalleryImage { src: "v.jpg", alt: "v", orientation: Orientation::Vertical };

#[test]
fn every_image_lands_in_exactly_one_column() {
    let columns = masonry_columns(GALLERY.images, GALLERY_COLUMNS);
    assert_eq!(columns.len(), GALLERY_COLUMNS);
    assert_eq!(columns.iter().map(Vec::len).sum::<usize>(), GALLERY.images.len());
}

#[test]
fn next_image_goes_to_shortest_column() {
    let images = [V, H, H, H];
    let columns = masonry_columns(&images, 2);
    // V fills column 0; the three horizontals stack in column 1 until it is taller.
    assert_eq!(columns[0].len(), 1);
    assert_eq!(columns[1].len(), 3);
}

#[test]
fn ties_go_left() {
    let images = [H, H];
    let columns = masonry_columns(&images, 2);
    assert_eq!(columns[0].len(), 1);
    assert_eq!(columns[1].len(), 1);
}

#[test]
fn zero_columns_is_treated_as_one() {
    let columns = masonry_columns(&[H, V], 0);
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].len(), 2);
}

#[test]
fn empty_gallery_gives_empty_columns() {
    let columns = masonry_columns(&[], 3);
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(Vec::is_empty));
}

#[test]
fn vertical_tiles_are_taller() {
    assert!(tile_height(Orientation::Vertical) > tile_height(Orientation::Horizontal));
}
