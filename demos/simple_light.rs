#[path = "common.rs"]
mod common;

fn main() {
    common::render_scene("simpleLight", "simple_light.png");
}
