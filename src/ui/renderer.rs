//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_frame → ANSI frame
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current screen to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    print!("{}", render_frame(&viewmodel, &state.theme, rows, cols));
}

/// Builds the ANSI output for one frame.
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    match vm {
        UIViewModel::List(list) => components::render_list_screen(&mut out, list, theme, rows, cols),
        UIViewModel::Detail(detail) => {
            components::render_detail_screen(&mut out, detail, theme, rows, cols);
        }
    }
    out
}
