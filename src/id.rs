use ulid::Ulid;

/// Source of caller-generated event ids. Injected into the scheduler so
/// tests can supply deterministic ids instead of wall-clock-derived ones.
pub trait IdSource {
    /// Next id, unique within the session.
    fn next(&mut self) -> String;
}

/// Default source: freshly minted ulids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidIds;

impl IdSource for UlidIds {
    fn next(&mut self) -> String {
        Ulid::new().to_string()
    }
}

/// Monotonic counter source for deterministic tests and demos.
#[derive(Debug, Clone, Default)]
pub struct SeqIds(u64);

impl SeqIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SeqIds {
    fn next(&mut self) -> String {
        let id = self.0.to_string();
        self.0 += 1;
        id
    }
}
