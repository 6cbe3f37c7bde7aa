use ws_core::model::{ZoneCell, ZoneStatus};

use crate::constants::{HOTDESK_FIRST_COL, ZONE_COLS, ZONE_ROWS};
use crate::random::RandomSource;

/// Status of one cell. Assigned seating and the hot-desk block never mix:
/// columns before [`HOTDESK_FIRST_COL`] are never `hotdesk`, columns from it
/// on are never `assigned`.
fn cell_status(col: u32, roll: f64) -> ZoneStatus {
    if col < HOTDESK_FIRST_COL {
        if roll > 0.6 {
            ZoneStatus::Occupied
        } else if roll > 0.3 {
            ZoneStatus::Assigned
        } else {
            ZoneStatus::Free
        }
    } else if roll > 0.65 {
        ZoneStatus::Occupied
    } else if roll > 0.35 {
        ZoneStatus::Hotdesk
    } else {
        ZoneStatus::Free
    }
}

/// Row-major 8×12 floor grid.
pub fn build_zone_grid(rng: &mut dyn RandomSource) -> Vec<ZoneCell> {
    let mut cells = Vec::with_capacity((ZONE_ROWS * ZONE_COLS) as usize);
    for row in 0..ZONE_ROWS {
        for col in 0..ZONE_COLS {
            let status = cell_status(col, rng.next_unit());
            let employee = match status {
                ZoneStatus::Occupied | ZoneStatus::Assigned => {
                    Some(format!("Emp {}", rng.int_range(1, 150)))
                }
                _ => None,
            };
            cells.push(ZoneCell {
                id: format!("{row}-{col}"),
                row,
                col,
                status,
                employee,
                temperature: rng.uniform(20.0, 28.0),
            });
        }
    }
    cells
}
