#[derive(Clone, Debug)]
pub enum Msg {
    Next,
    Previous,
    JumpTo(usize),
    Tick,
}
