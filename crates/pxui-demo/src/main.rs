#![forbid(unsafe_code)]

//! Renders a sample attachment tree to stdout as ASCII art.
//!
//! Builds a nested configuration, loads it into a tree, runs the layout
//! pass, focuses one node and activates another, then dumps the pixel
//! buffer with one character per pixel (shaded by luminance).

use pxui_core::config::ConfigNode;
use pxui_render::sprite::PlaceholderIcons;
use pxui_render::surface::PixelBuffer;
use pxui_widgets::button::{MenuHost, MenuItem};
use pxui_widgets::tree::{NodeId, ROW_HEIGHT, Tree};

const DISPLAY_WIDTH: i32 = 128;
const SHADES: &[u8] = b" .:-=+*#%@";

struct StdoutHost;

impl MenuHost for StdoutHost {
    fn on_menu_open(&mut self, node: NodeId, item: MenuItem) {
        println!("menu open: node {} -> {:?}", node.index(), item);
    }
}

fn sample_config() -> ConfigNode {
    let mut wheel = ConfigNode::new();
    wheel.set("type", "item");

    let mut seat = ConfigNode::new();
    seat.set("type", "seat");
    seat.push_node("attachments", wheel);

    let mut lamp = ConfigNode::new();
    lamp.set("type", "item");

    let mut cart = ConfigNode::new();
    cart.set("type", "entity");
    cart.push_node("attachments", seat);
    cart.push_node("attachments", lamp);
    cart
}

fn dump(buf: &PixelBuffer) {
    for y in 0..buf.bounds().h {
        let mut line = String::with_capacity(buf.bounds().w as usize);
        for x in 0..buf.bounds().w {
            let color = buf.get(x, y).unwrap_or_default();
            if color.is_transparent() {
                line.push(' ');
            } else {
                let shade = (color.luminance() as usize * (SHADES.len() - 1)) / 255;
                line.push(SHADES[shade] as char);
            }
        }
        println!("{}", line.trim_end());
    }
}

fn main() {
    let mut tree = Tree::from_config(sample_config());
    tree.layout();

    let root = tree.root();
    let seat = tree.children(root)[0];
    let wheel = tree.children(seat)[0];

    tree.focus(wheel);
    for effect in tree.activate(wheel) {
        println!("effect: {effect:?}");
    }

    let mut host = StdoutHost;
    tree.click_button(wheel, 1, &mut host);

    let rows = tree.len() as i32;
    let mut buf = PixelBuffer::new(DISPLAY_WIDTH, rows * ROW_HEIGHT);
    tree.render(&mut buf, &PlaceholderIcons::new());
    dump(&buf);
}
