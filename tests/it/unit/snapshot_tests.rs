//! Snapshot tests using the insta crate.
//!
//! Snapshot testing captures serialized output and stores it in `.snap`
//! files, making it easy to verify and update expected values.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestCanvasBuilder;
use pixelboard::{CanvasConfig, Cell, PaintedCell, PointerEvent};

#[test]
fn snapshot_canvas_config_default() {
    let config = CanvasConfig::default();
    insta::assert_json_snapshot!("canvas_config_default", config);
}

#[test]
fn snapshot_painted_cell() {
    let painted = PaintedCell::new(Cell::new(3, 4), "#000000");
    insta::assert_json_snapshot!("painted_cell", painted);
}

#[test]
fn snapshot_display_list_single_pixel() {
    let mut canvas = TestCanvasBuilder::new()
        .with_grid(10, 10)
        .with_cell_size(10)
        .build();
    canvas.handle_pointer(&PointerEvent::down(5.0, 5.0, 1));
    canvas.handle_pointer(&PointerEvent::up(500.0, 500.0));

    insta::assert_json_snapshot!("display_list_single_pixel", canvas.display_list());
}
