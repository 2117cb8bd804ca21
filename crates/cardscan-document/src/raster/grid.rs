// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Read-only pixel grid abstraction consumed by the barcode locator.

use std::ops::Deref;

use image::{ImageBuffer, Pixel};

/// A read-only 2-D grid of pixels with the origin at the top-left corner.
///
/// The barcode locator only ever compares pixels against a designated
/// background value, so any pixel type with equality will do.
pub trait PixelGrid {
    type Pixel: PartialEq + Copy;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Pixel at `(x, y)`. Callers keep `x < width()` and `y < height()`.
    fn pixel_at(&self, x: u32, y: u32) -> Self::Pixel;
}

impl<P, C> PixelGrid for ImageBuffer<P, C>
where
    P: Pixel + PartialEq,
    C: Deref<Target = [P::Subpixel]>,
{
    type Pixel = P;

    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> P {
        *self.get_pixel(x, y)
    }
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    type Pixel = G::Pixel;

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel_at(&self, x: u32, y: u32) -> G::Pixel {
        (**self).pixel_at(x, y)
    }
}
