#[path = "common.rs"]
mod common;

fn main() {
    common::render_scene("final", "rtnextweek_final.png");
}
