use std::sync::Mutex;

/// Error sink
/// Receives the text to surface when a connection attempt fails
pub trait ErrorDisplay: Send + Sync {
    fn show(&self, text: &str);
}

/// Error block
/// Form scoped element holding the latest failure text
/// Hidden until the first failure, then overwritten on each one
#[derive(Debug, Default)]
pub struct ErrorBlock {
    state: Mutex<BlockState>,
}

#[derive(Debug)]
struct BlockState {
    text: String,
    hidden: bool,
}

impl Default for BlockState {
    fn default() -> Self {
        Self {
            text: "".to_owned(),
            hidden: true,
        }
    }
}

impl ErrorBlock {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.state.lock().unwrap().text.clone()
    }

    pub fn is_hidden(&self) -> bool {
        self.state.lock().unwrap().hidden
    }

    pub fn is_empty(&self) -> bool {
        self.text().len() <= 0
    }
}

impl ErrorDisplay for ErrorBlock {
    fn show(&self, text: &str) {
        let mut state = self.state.lock().unwrap();

        state.text = text.to_owned();
        state.hidden = false;
    }
}
