//! Downtown street grid shared by the demo.
//!
//! Four avenues run east–west, three cross streets north–south, 200 units
//! apart.  A ring road along the southern and eastern edge is twice as fast
//! as the inner avenues, so shortest and fastest paths diverge.

use anyhow::Result;

use cg_core::{BoundingBox, Point, Street, TreapConfig};
use cg_query::{Block, City, CityBuilder};

pub const COLS:    u32 = 4;
pub const ROWS:    u32 = 3;
pub const SPACING: f64 = 200.0;

/// Vertex name at column `c`, row `r`.
pub fn corner(c: u32, r: u32) -> String {
    format!("c{c}r{r}")
}

/// Build the downtown grid with one block per cell.
pub fn build_city(treap: TreapConfig) -> Result<City> {
    let mut b = CityBuilder::new((COLS * ROWS) as usize, false, "downtown").treap_config(treap);

    for r in 0..ROWS {
        for c in 0..COLS {
            b.add_vertex(corner(c, r), Point::new(c as f64 * SPACING, r as f64 * SPACING))?;
        }
    }

    // Avenues (east–west).  Row 0 is the ring road.
    for r in 0..ROWS {
        let velocity = if r == 0 { 20.0 } else { 10.0 };
        for c in 0..COLS - 1 {
            let street = Street::new(format!("Avenue {r}"), velocity, SPACING);
            b.add_street(&corner(c, r), &corner(c + 1, r), street)?;
        }
    }

    // Cross streets (north–south).  The last column is the ring road.
    for c in 0..COLS {
        let velocity = if c == COLS - 1 { 20.0 } else { 6.0 };
        for r in 0..ROWS - 1 {
            let street = Street::new(format!("Street {c}"), velocity, SPACING);
            b.add_street(&corner(c, r), &corner(c, r + 1), street)?;
        }
    }

    let inset = SPACING * 0.1;
    for r in 0..ROWS - 1 {
        for c in 0..COLS - 1 {
            let rect = BoundingBox::new(
                c as f64 * SPACING + inset,
                r as f64 * SPACING + inset,
                SPACING - 2.0 * inset,
                SPACING - 2.0 * inset,
            )?;
            b.add_block(Block::new(format!("B{c}{r}"), rect));
        }
    }

    Ok(b.build()?)
}
