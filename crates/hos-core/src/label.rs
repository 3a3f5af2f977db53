//! Location labels for the duty log.
//!
//! Driving segments between two named places get a synthetic label such as
//! `"Highway I-40, TN"`: the region is taken from the origin for the first
//! half of the leg and from the destination for the second half; the route
//! number is drawn from an injected [`RouteNumbers`] source so the draw can
//! be seeded (or fixed) in tests.

use crate::LabelRng;

/// Smallest and largest interstate number drawn.
pub const ROUTE_NUMBER_MIN: u8 = 1;
pub const ROUTE_NUMBER_MAX: u8 = 99;

// ── Route-number sources ──────────────────────────────────────────────────────

/// Supplies the cosmetic route number for each interpolated label.
///
/// Must not block or perform I/O; the value never affects compliance logic.
pub trait RouteNumbers {
    fn next_route_number(&mut self) -> u8;
}

impl RouteNumbers for LabelRng {
    #[inline]
    fn next_route_number(&mut self) -> u8 {
        self.gen_range(ROUTE_NUMBER_MIN..=ROUTE_NUMBER_MAX)
    }
}

/// Always returns the same route number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedRoute(pub u8);

impl RouteNumbers for FixedRoute {
    #[inline]
    fn next_route_number(&mut self) -> u8 {
        self.0
    }
}

impl<T: RouteNumbers + ?Sized> RouteNumbers for &mut T {
    #[inline]
    fn next_route_number(&mut self) -> u8 {
        (**self).next_route_number()
    }
}

// ── Labels ────────────────────────────────────────────────────────────────────

/// Two-letter region (state) abbreviation in a free-text place name.
///
/// Splits on commas and whitespace and returns the *last* token that is
/// exactly two uppercase ASCII letters, or `""` if there is none.
///
/// ```rust,ignore
/// assert_eq!(region_code("Chicago, IL"), "IL");
/// assert_eq!(region_code("Somewhere"), "");
/// ```
pub fn region_code(place: &str) -> &str {
    place
        .split(|c: char| c == ',' || c.is_whitespace())
        .rev()
        .find(|tok| tok.len() == 2 && tok.bytes().all(|b| b.is_ascii_uppercase()))
        .unwrap_or("")
}

/// Label for a driving segment at `progress` (fraction of the leg's distance
/// already covered when the segment starts).
///
/// Before the midpoint the origin region is used, from the midpoint on the
/// destination region.  If the chosen region is empty, `default_region` is
/// used instead.
pub fn interpolated_label<N: RouteNumbers + ?Sized>(
    progress:       f64,
    origin_region:  &str,
    dest_region:    &str,
    default_region: &str,
    numbers:        &mut N,
) -> String {
    let region = if progress < 0.5 { origin_region } else { dest_region };
    let region = if region.is_empty() { default_region } else { region };
    let route = numbers.next_route_number();
    format!("Highway I-{route}, {region}")
}
