use std::sync::Mutex;

/// Navigation
/// Called with the destination once a connection attempt succeeds
pub trait Navigator: Send + Sync {
    fn go_to(&self, location: &str);
}

/// Current location register
/// Headless stand in for the browser location
#[derive(Debug, Default)]
pub struct Location {
    href: Mutex<Option<String>>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.href.lock().unwrap().clone()
    }
}

impl Navigator for Location {
    fn go_to(&self, location: &str) {
        *self.href.lock().unwrap() = Some(location.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_nowhere() {
        assert_eq!(Location::new().current(), None);
    }

    #[test]
    fn records_the_last_destination() {
        let location = Location::new();

        location.go_to("/usr/dashboard");

        assert_eq!(location.current(), Some("/usr/dashboard".to_owned()));
    }
}
