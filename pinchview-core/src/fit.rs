//! Initial placement of an image on the drawing surface.
//!
//! The placement preserves the image aspect ratio exactly. Image and surface
//! are each classified as landscape (`ratio >= 1`) or portrait, and:
//!
//! - same orientation: the relatively wider image fits by width and is centred
//!   vertically, otherwise it fits by height and is centred horizontally;
//! - landscape image on a portrait surface: always fit by width;
//! - portrait image on a landscape surface: always fit by height.
//!
//! In the mixed cases the cross axis is centred symmetrically and its offset
//! is allowed to go negative.

use crate::geometry::{Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn of(size: Size) -> Self {
        if size.ratio() >= 1.0 {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

fn fit_width(image: Size, surface: Size) -> Rect {
    let width = surface.width;
    let height = width / image.ratio();
    Rect::new(0.0, (surface.height - height) / 2.0, width, height)
}

fn fit_height(image: Size, surface: Size) -> Rect {
    let height = surface.height;
    let width = height * image.ratio();
    Rect::new((surface.width - width) / 2.0, 0.0, width, height)
}

/// Compute the fitted placement box, or `None` when either size is not
/// strictly positive and finite.
pub fn compute_fit(image: Size, surface: Size) -> Option<Rect> {
    if !image.is_valid() || !surface.is_valid() {
        return None;
    }

    let wider_than_surface = image.ratio() > surface.ratio();
    let rect = match (Orientation::of(image), Orientation::of(surface)) {
        (Orientation::Landscape, Orientation::Landscape)
        | (Orientation::Portrait, Orientation::Portrait) => {
            if wider_than_surface {
                fit_width(image, surface)
            } else {
                fit_height(image, surface)
            }
        }
        (Orientation::Landscape, Orientation::Portrait) => fit_width(image, surface),
        (Orientation::Portrait, Orientation::Landscape) => fit_height(image, surface),
    };
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_landscape_image_square_surface_fits_width() {
        let fit = compute_fit(Size::new(1000.0, 500.0), Size::new(300.0, 300.0)).unwrap();
        assert_eq!(fit, Rect::new(0.0, 75.0, 300.0, 150.0));
    }

    #[test]
    fn test_portrait_image_portrait_surface_fits_width() {
        let fit = compute_fit(Size::new(500.0, 1000.0), Size::new(300.0, 900.0)).unwrap();
        assert_eq!(fit, Rect::new(0.0, 150.0, 300.0, 600.0));
    }

    #[test]
    fn test_landscape_pair_narrower_image_fits_height() {
        // 4:3 image on a 16:9 surface
        let fit = compute_fit(Size::new(800.0, 600.0), Size::new(1600.0, 900.0)).unwrap();
        assert_close(fit.height, 900.0);
        assert_close(fit.width, 1200.0);
        assert_close(fit.x, 200.0);
        assert_close(fit.y, 0.0);
    }

    #[test]
    fn test_portrait_pair_taller_image_fits_height() {
        let fit = compute_fit(Size::new(300.0, 1000.0), Size::new(600.0, 1000.0)).unwrap();
        assert_eq!(fit, Rect::new(150.0, 0.0, 300.0, 1000.0));
    }

    #[test]
    fn test_mixed_orientations() {
        let fit = compute_fit(Size::new(1200.0, 800.0), Size::new(400.0, 800.0)).unwrap();
        assert_close(fit.width, 400.0);
        assert_close(fit.y, (800.0 - fit.height) / 2.0);

        let fit = compute_fit(Size::new(600.0, 900.0), Size::new(1000.0, 500.0)).unwrap();
        assert_close(fit.height, 500.0);
        assert_close(fit.x, (1000.0 - fit.width) / 2.0);
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let images = [(1000.0, 500.0), (500.0, 1000.0), (333.0, 777.0), (1.0, 1.0), (4000.0, 3.0)];
        let surfaces = [(300.0, 300.0), (300.0, 900.0), (1920.0, 1080.0), (1.0, 2.0)];
        for &(iw, ih) in &images {
            for &(sw, sh) in &surfaces {
                let fit = compute_fit(Size::new(iw, ih), Size::new(sw, sh)).unwrap();
                let expected = iw / ih;
                let got = fit.width / fit.height;
                assert!(
                    (got - expected).abs() / expected < 1e-9,
                    "image {iw}x{ih} on {sw}x{sh}: ratio {got} != {expected}"
                );
                assert!(
                    (fit.width - sw).abs() < 1e-9 || (fit.height - sh).abs() < 1e-9,
                    "one axis must match the surface"
                );
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let a = compute_fit(Size::new(640.0, 480.0), Size::new(320.0, 568.0));
        let b = compute_fit(Size::new(640.0, 480.0), Size::new(320.0, 568.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(compute_fit(Size::new(0.0, 100.0), Size::new(300.0, 300.0)).is_none());
        assert!(compute_fit(Size::new(100.0, 0.0), Size::new(300.0, 300.0)).is_none());
        assert!(compute_fit(Size::new(100.0, 100.0), Size::new(-1.0, 300.0)).is_none());
        assert!(compute_fit(Size::new(100.0, 100.0), Size::new(300.0, 0.0)).is_none());
    }

    #[test]
    fn test_orientation_boundary() {
        assert_eq!(Orientation::of(Size::new(300.0, 300.0)), Orientation::Landscape);
        assert_eq!(Orientation::of(Size::new(299.0, 300.0)), Orientation::Portrait);
    }
}
