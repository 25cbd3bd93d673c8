// Capability of a display element whose horizontal position can be read
// and written. The animation logic only depends on this, so it can be
// driven against a fake element instead of a live scene.
pub trait Renderable {
    fn position(&self) -> i32;
    fn set_position(&mut self, cx: i32);
}
