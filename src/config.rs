/// Largest input accepted unless configured otherwise.
pub const DEFAULT_MAX_INPUT_SIZE : usize = 4 * 1024;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Config {
    /// inputs above this many bytes are rejected before decoding
    pub max_input_size : usize,

    /// turn the first invalid digit that lands in an output word into an
    /// error instead of a warning, bytes in the dropped tail never count
    pub strict : bool,
}

impl Config {
    pub fn max_input_size(self, max_input_size : usize) -> Self {
        Config{ max_input_size, ..self }
    }

    pub fn strict(self, strict : bool) -> Self {
        Config{ strict, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config{
            max_input_size : DEFAULT_MAX_INPUT_SIZE,
            strict :         false,
        }
    }
}
