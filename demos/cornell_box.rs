#[path = "common.rs"]
mod common;

fn main() {
    common::render_scene("cornell", "cornell_box.png");
}
