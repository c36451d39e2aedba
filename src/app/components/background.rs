use dioxus::prelude::*;

const DOT_ROWS: usize = 15;
const DOT_COLUMNS: usize = 20;

/// Position of one decorative dot, in percent of the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPosition {
    pub row: usize,
    pub col: usize,
    pub left: usize,
    pub top: usize,
}

/// Staggered grid: every row shifts by (row % 3) * 2, every column by (col % 3) * 2
pub fn dot_positions() -> Vec<DotPosition> {
    (0..DOT_ROWS)
        .flat_map(|row| {
            (0..DOT_COLUMNS).map(move |col| DotPosition {
                row,
                col,
                left: col * 5 + (row % 3) * 2,
                top: row * 6 + (col % 3) * 2,
            })
        })
        .collect()
}

// Gradient backdrop with dot pattern (BEM: c-backdrop)
#[component]
pub fn Backdrop() -> Element {
    let dots = dot_positions();

    rsx! {
        div { class: "c-backdrop__gradient" }
        div { class: "c-backdrop__dots",
            for dot in dots {
                div {
                    key: "{dot.row}-{dot.col}",
                    class: "c-backdrop__dot",
                    style: "left: {dot.left}%; top: {dot.top}%;",
                }
            }
        }
    }
}
