// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for barcode location in the cardscan-document crate.
// Scans a synthetic card-sized page whose barcode sits near the bottom, so
// most of the cost is rejecting ordinary rows.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

use cardscan_document::{BarcodeLocator, WHITE};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Locate a 31-bar, 58px-tall, 731px-wide barcode on an 800x1100 page.
///
/// The page also carries a few 1px text-like rules that span the barcode's
/// width, exercising the probe's skip path.
fn bench_locate(c: &mut Criterion) {
    let (width, height) = (800u32, 1100u32);
    let mut page = RgbImage::from_pixel(width, height, WHITE);
    let black = Rgb([0u8, 0, 0]);

    // Rules: one dark row each, same span as the barcode.
    for y in [120u32, 340, 610] {
        for x in 30..=761 {
            page.put_pixel(x, y, black);
        }
    }

    // 31 bars: 17px wide with 7px gaps, first bar at x=30, rows 1000..1058.
    // The last bar ends at 30 + 30 * 24 + 11 = 761.
    for bar in 0..31u32 {
        let start = 30 + bar * 24;
        let end = if bar == 30 { 761 } else { start + 16 };
        for y in 1000..1058 {
            for x in start..=end {
                page.put_pixel(x, y, black);
            }
        }
    }

    c.bench_function("locate (800x1100, 31 bars)", |b| {
        b.iter(|| {
            let found = BarcodeLocator::new(black_box(&page), WHITE)
                .locate(58, 731)
                .expect("valid parameters");
            black_box(found);
        });
    });
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
