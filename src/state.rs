#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ControllerState {
    Stopped, // No timer armed; the circle holds its position
    Running, // Timer armed; the circle advances once per tick
}
