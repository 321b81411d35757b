#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub padding: usize,
    pub swatch_width: usize,
    pub interactive_mode: bool,
}
