// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless board session.
//!
//! Mounts a board, feeds it a scripted sequence of wheel, drag and toolbar
//! input on a simulated clock, and logs the render plan after each step.
//! Set `RUST_LOG=trace` to see every gesture decision.
//!
//! Run:
//! - `cargo run -p understory_board_demos --example board_sim`

use kurbo::{Point, Size, Vec2};
use tracing::{error, info};
use understory_board::{Board, BoardOptions, ToolbarAction};
use understory_board_demos::{CheckerRasterizer, init_tracing};
use understory_pan_area::{StaticMeasurements, WheelInput};

enum Step {
    Wheel(Point, Vec2, bool),
    Drag(Point, Point),
    Toolbar(ToolbarAction),
    Minimap(Point),
    Resize(Size),
    Wait(u64),
}

fn main() {
    init_tracing();

    let mut sizes = StaticMeasurements {
        screen: Size::new(1000.0, 800.0),
        natural_content: Size::new(800.0, 640.0),
    };
    let options = BoardOptions::default()
        .with_anchor_zoom_on_cursor(true)
        .with_snapshot_while_moving(true);
    let mut board = match Board::try_new(options) {
        Ok(board) => board,
        Err(err) => {
            error!(%err, "invalid board options");
            return;
        }
    };
    let mut rasterizer = CheckerRasterizer::new(32);

    let mut now = 0;
    board.mount(now);
    while let Some(deadline) = board.area().next_deadline() {
        now = deadline;
        board.poll(now, &sizes);
    }
    board.drive_rasterizer(&mut rasterizer);
    report("mounted", &board);

    let script = [
        Step::Toolbar(ToolbarAction::ToggleZoomMode),
        Step::Wheel(Point::new(800.0, 200.0), Vec2::new(0.0, 250.0), false),
        Step::Wait(150),
        Step::Toolbar(ToolbarAction::ToggleZoomMode),
        Step::Toolbar(ToolbarAction::ToggleDragMode),
        Step::Drag(Point::new(500.0, 400.0), Point::new(1400.0, 900.0)),
        Step::Wait(150),
        Step::Wheel(Point::new(500.0, 400.0), Vec2::new(0.0, -120.0), true),
        Step::Minimap(Point::new(10.0, 70.0)),
        Step::Toolbar(ToolbarAction::ResetToNative),
        Step::Resize(Size::new(640.0, 480.0)),
        Step::Toolbar(ToolbarAction::ZoomOut),
        Step::Toolbar(ToolbarAction::FitToScreen),
    ];

    for step in script {
        now += 16;
        let label = match step {
            Step::Wheel(pos, delta, ctrl) => {
                board.wheel(&WheelInput::new(pos, delta).with_ctrl(ctrl), now);
                "wheel"
            }
            Step::Drag(from, to) => {
                board.pointer_down(from, now);
                let steps = 8_u32;
                for i in 1..=steps {
                    now += 16;
                    board.pointer_move(from.lerp(to, f64::from(i) / f64::from(steps)), now);
                }
                board.pointer_up(now);
                "drag"
            }
            Step::Toolbar(action) => {
                board.dispatch(action);
                "toolbar"
            }
            Step::Minimap(click) => {
                board.minimap_click(click);
                "minimap"
            }
            Step::Resize(screen) => {
                sizes.screen = screen;
                board.remeasure(now, &sizes);
                "resize"
            }
            Step::Wait(ms) => {
                now += ms;
                board.poll(now, &sizes);
                "wait"
            }
        };
        report(label, &board);
    }
    info!(served = rasterizer.served, "session finished");
}

fn report(label: &str, board: &Board) {
    let state = board.state();
    let frame = board.area().frame();
    let toolbar = board.toolbar();
    info!(
        step = label,
        phase = ?board.phase(),
        percent = %toolbar.percent,
        offset = ?state.offset,
        presentation = ?frame.presentation,
        cursor = ?frame.cursor,
        indicator = ?board.minimap().map(|map| map.indicator_rect()),
        "board step"
    );
}
